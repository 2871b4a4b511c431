//! # PostRepository
//!
//! `post` テーブルの永続化を担当するリポジトリ。
//!
//! 任意項目は `Option<String>` をそのままバインドし、値なしは `NULL` で保存する。
//! ロック・削除の方針は [`QuestionRepository`](super::QuestionRepository) と同じ。

use async_trait::async_trait;
use atividade_domain::{
   post::{NewPost, Post, PostRecord},
   value_objects::RecordId,
};
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use crate::{db::TxContext, error::InfraError};

/// 投稿リポジトリトレイト
#[async_trait]
pub trait PostRepository: Send + Sync {
   async fn find_all(&self) -> Result<Vec<Post>, InfraError>;

   async fn find_by_id(&self, id: RecordId) -> Result<Option<Post>, InfraError>;

   /// ID で検索し、トランザクション終了まで行をロックする
   async fn find_by_id_for_update(
      &self,
      tx: &mut TxContext,
      id: RecordId,
   ) -> Result<Option<Post>, InfraError>;

   async fn insert(&self, tx: &mut TxContext, post: &NewPost) -> Result<Post, InfraError>;

   async fn update(&self, tx: &mut TxContext, post: &Post) -> Result<(), InfraError>;

   /// 削除する。対象行が存在しなかった場合は `false` を返す
   async fn delete(&self, tx: &mut TxContext, id: RecordId) -> Result<bool, InfraError>;
}

const SELECT_COLUMNS: &str = "id, name, whatsapp, race, description, instagram, adorno, color, \
                              neighbordhood, reference, created_date, created_time";

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
   id:            i64,
   name:          String,
   whatsapp:      String,
   race:          String,
   description:   Option<String>,
   instagram:     Option<String>,
   adorno:        Option<String>,
   color:         Option<String>,
   neighbordhood: Option<String>,
   reference:     Option<String>,
   created_date:  NaiveDate,
   created_time:  NaiveTime,
}

impl From<PostRow> for Post {
   fn from(row: PostRow) -> Self {
      Post::from_db(PostRecord {
         id:            RecordId::from_i64(row.id),
         name:          row.name,
         whatsapp:      row.whatsapp,
         race:          row.race,
         description:   row.description,
         instagram:     row.instagram,
         adorno:        row.adorno,
         color:         row.color,
         neighbordhood: row.neighbordhood,
         reference:     row.reference,
         created_date:  row.created_date,
         created_time:  row.created_time,
      })
   }
}

/// PostgreSQL 実装の PostRepository
#[derive(Debug, Clone)]
pub struct PostgresPostRepository {
   pool: PgPool,
}

impl PostgresPostRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Post>, InfraError> {
      let sql = format!("SELECT {SELECT_COLUMNS} FROM post");
      let rows = sqlx::query_as::<_, PostRow>(&sql)
         .fetch_all(&self.pool)
         .await?;

      Ok(rows.into_iter().map(Post::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: RecordId) -> Result<Option<Post>, InfraError> {
      let sql = format!("SELECT {SELECT_COLUMNS} FROM post WHERE id = $1");
      let row = sqlx::query_as::<_, PostRow>(&sql)
         .bind(id.as_i64())
         .fetch_optional(&self.pool)
         .await?;

      Ok(row.map(Post::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id_for_update(
      &self,
      tx: &mut TxContext,
      id: RecordId,
   ) -> Result<Option<Post>, InfraError> {
      let sql = format!("SELECT {SELECT_COLUMNS} FROM post WHERE id = $1 FOR UPDATE");
      let row = sqlx::query_as::<_, PostRow>(&sql)
         .bind(id.as_i64())
         .fetch_optional(tx.conn())
         .await?;

      Ok(row.map(Post::from))
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn insert(&self, tx: &mut TxContext, post: &NewPost) -> Result<Post, InfraError> {
      let sql = format!(
         r#"
            INSERT INTO post (
               name, whatsapp, race, description, instagram, adorno,
               color, neighbordhood, reference, created_date, created_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {SELECT_COLUMNS}
            "#
      );
      let row = sqlx::query_as::<_, PostRow>(&sql)
         .bind(&post.name)
         .bind(&post.whatsapp)
         .bind(&post.race)
         .bind(post.description.as_deref())
         .bind(post.instagram.as_deref())
         .bind(post.adorno.as_deref())
         .bind(post.color.as_deref())
         .bind(post.neighbordhood.as_deref())
         .bind(post.reference.as_deref())
         .bind(post.created_date)
         .bind(post.created_time)
         .fetch_one(tx.conn())
         .await?;

      Ok(row.into())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %post.id()))]
   async fn update(&self, tx: &mut TxContext, post: &Post) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            UPDATE post
            SET name = $1, whatsapp = $2, race = $3, description = $4,
                instagram = $5, adorno = $6, color = $7, neighbordhood = $8,
                reference = $9, created_date = $10, created_time = $11
            WHERE id = $12
            "#,
      )
      .bind(post.name())
      .bind(post.whatsapp())
      .bind(post.race())
      .bind(post.description())
      .bind(post.instagram())
      .bind(post.adorno())
      .bind(post.color())
      .bind(post.neighbordhood())
      .bind(post.reference())
      .bind(post.created_date())
      .bind(post.created_time())
      .bind(post.id().as_i64())
      .execute(tx.conn())
      .await?;

      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, tx: &mut TxContext, id: RecordId) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM post WHERE id = $1")
         .bind(id.as_i64())
         .execute(tx.conn())
         .await?;

      Ok(result.rows_affected() > 0)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresPostRepository>();
      assert_send_sync::<Box<dyn PostRepository>>();
   }
}
