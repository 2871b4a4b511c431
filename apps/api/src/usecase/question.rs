//! 問題（questoes）ユースケース

use std::sync::Arc;

use atividade_domain::{
   question::{Question, QuestionDraft},
   value_objects::RecordId,
};
use atividade_infra::{db::TransactionManager, repository::QuestionRepository};

use crate::error::ApiError;

pub(crate) const NOT_FOUND: &str = "Questão não encontrada";

/// 問題ユースケース
pub struct QuestionUseCaseImpl {
   question_repository: Arc<dyn QuestionRepository>,
   tx_manager:          Arc<dyn TransactionManager>,
}

impl QuestionUseCaseImpl {
   pub fn new(
      question_repository: Arc<dyn QuestionRepository>,
      tx_manager: Arc<dyn TransactionManager>,
   ) -> Self {
      Self {
         question_repository,
         tx_manager,
      }
   }

   pub async fn list(&self) -> Result<Vec<Question>, ApiError> {
      let questions = self.question_repository.find_all().await?;
      Ok(questions)
   }

   pub async fn get(&self, id: RecordId) -> Result<Question, ApiError> {
      self
         .question_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
   }

   /// 問題を作成する
   ///
   /// 必須項目が欠けている場合は何も挿入せずにエラーを返す。
   pub async fn create(&self, draft: QuestionDraft) -> Result<Question, ApiError> {
      let new_question = draft.into_new_question()?;

      let mut tx = self.tx_manager.begin().await?;
      let question = self
         .question_repository
         .insert(&mut tx, &new_question)
         .await?;
      tx.commit().await?;

      tracing::info!(id = %question.id(), "問題を作成しました");
      Ok(question)
   }

   /// 問題を部分更新する
   ///
   /// 1. 行をロックして現在値を取得（存在しなければ 404）
   /// 2. 値ありの項目だけ置き換える
   /// 3. 全カラムを UPDATE してコミット
   pub async fn update(&self, id: RecordId, draft: QuestionDraft) -> Result<Question, ApiError> {
      let mut tx = self.tx_manager.begin().await?;
      let current = self
         .question_repository
         .find_by_id_for_update(&mut tx, id)
         .await?
         .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;

      let updated = current.merge(draft);
      self.question_repository.update(&mut tx, &updated).await?;
      tx.commit().await?;

      Ok(updated)
   }

   pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
      let mut tx = self.tx_manager.begin().await?;
      let deleted = self.question_repository.delete(&mut tx, id).await?;
      if !deleted {
         return Err(ApiError::NotFound(NOT_FOUND.to_string()));
      }
      tx.commit().await?;

      tracing::info!(%id, "問題を削除しました");
      Ok(())
   }
}
