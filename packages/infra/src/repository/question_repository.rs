//! # QuestionRepository
//!
//! `questoes` テーブルの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **並び順を指定しない**: 一覧は DB が返す順序のまま（既存 API の挙動）
//! - **更新前の行ロック**: 部分更新は既存値とのマージが必要なため、
//!   [`find_by_id_for_update`](QuestionRepository::find_by_id_for_update) で
//!   `FOR UPDATE` ロックを取ってから UPDATE する
//! - **削除の存在確認**: 別クエリで確認せず、DELETE の影響行数で判定する

use async_trait::async_trait;
use atividade_domain::{
   question::{NewQuestion, Question},
   value_objects::RecordId,
};
use sqlx::PgPool;

use crate::{db::TxContext, error::InfraError};

/// 問題リポジトリトレイト
#[async_trait]
pub trait QuestionRepository: Send + Sync {
   /// 全件を取得する（並び順は DB 依存）
   async fn find_all(&self) -> Result<Vec<Question>, InfraError>;

   /// ID で検索する
   async fn find_by_id(&self, id: RecordId) -> Result<Option<Question>, InfraError>;

   /// ID で検索し、トランザクション終了まで行をロックする
   async fn find_by_id_for_update(
      &self,
      tx: &mut TxContext,
      id: RecordId,
   ) -> Result<Option<Question>, InfraError>;

   /// 挿入し、採番された ID を含むエンティティを返す
   async fn insert(
      &self,
      tx: &mut TxContext,
      question: &NewQuestion,
   ) -> Result<Question, InfraError>;

   /// 全カラムを更新する
   async fn update(&self, tx: &mut TxContext, question: &Question) -> Result<(), InfraError>;

   /// 削除する。対象行が存在しなかった場合は `false` を返す
   async fn delete(&self, tx: &mut TxContext, id: RecordId) -> Result<bool, InfraError>;
}

/// `questoes` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
   id:         i64,
   enunciado:  String,
   disciplina: String,
   tema:       String,
   nivel:      String,
}

impl From<QuestionRow> for Question {
   fn from(row: QuestionRow) -> Self {
      Question::from_db(
         RecordId::from_i64(row.id),
         row.enunciado,
         row.disciplina,
         row.tema,
         row.nivel,
      )
   }
}

/// PostgreSQL 実装の QuestionRepository
#[derive(Debug, Clone)]
pub struct PostgresQuestionRepository {
   pool: PgPool,
}

impl PostgresQuestionRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Question>, InfraError> {
      let rows = sqlx::query_as::<_, QuestionRow>(
         r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(Question::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: RecordId) -> Result<Option<Question>, InfraError> {
      let row = sqlx::query_as::<_, QuestionRow>(
         r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Question::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id_for_update(
      &self,
      tx: &mut TxContext,
      id: RecordId,
   ) -> Result<Option<Question>, InfraError> {
      let row = sqlx::query_as::<_, QuestionRow>(
         r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            WHERE id = $1
            FOR UPDATE
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(tx.conn())
      .await?;

      Ok(row.map(Question::from))
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn insert(
      &self,
      tx: &mut TxContext,
      question: &NewQuestion,
   ) -> Result<Question, InfraError> {
      let row = sqlx::query_as::<_, QuestionRow>(
         r#"
            INSERT INTO questoes (enunciado, disciplina, tema, nivel)
            VALUES ($1, $2, $3, $4)
            RETURNING id, enunciado, disciplina, tema, nivel
            "#,
      )
      .bind(&question.enunciado)
      .bind(&question.disciplina)
      .bind(&question.tema)
      .bind(&question.nivel)
      .fetch_one(tx.conn())
      .await?;

      Ok(row.into())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %question.id()))]
   async fn update(&self, tx: &mut TxContext, question: &Question) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            UPDATE questoes
            SET enunciado = $1, disciplina = $2, tema = $3, nivel = $4
            WHERE id = $5
            "#,
      )
      .bind(question.enunciado())
      .bind(question.disciplina())
      .bind(question.tema())
      .bind(question.nivel())
      .bind(question.id().as_i64())
      .execute(tx.conn())
      .await?;

      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, tx: &mut TxContext, id: RecordId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            DELETE FROM questoes
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .execute(tx.conn())
      .await?;

      Ok(result.rows_affected() > 0)
   }
}
