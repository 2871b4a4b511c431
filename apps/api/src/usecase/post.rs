//! 投稿（post）ユースケース
//!
//! 構造は問題ユースケースと同じ。作成時に作成日時のデフォルト値を
//! 補完するため [`Clock`] を持つ。

use std::sync::Arc;

use atividade_domain::{
   clock::Clock,
   post::{Post, PostDraft},
   value_objects::RecordId,
};
use atividade_infra::{db::TransactionManager, repository::PostRepository};

use crate::error::ApiError;

pub(crate) const NOT_FOUND: &str = "Post não encontrado";

/// 投稿ユースケース
pub struct PostUseCaseImpl {
   post_repository: Arc<dyn PostRepository>,
   tx_manager:      Arc<dyn TransactionManager>,
   clock:           Arc<dyn Clock>,
}

impl PostUseCaseImpl {
   pub fn new(
      post_repository: Arc<dyn PostRepository>,
      tx_manager: Arc<dyn TransactionManager>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         post_repository,
         tx_manager,
         clock,
      }
   }

   pub async fn list(&self) -> Result<Vec<Post>, ApiError> {
      let posts = self.post_repository.find_all().await?;
      Ok(posts)
   }

   pub async fn get(&self, id: RecordId) -> Result<Post, ApiError> {
      self
         .post_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
   }

   pub async fn create(&self, draft: PostDraft) -> Result<Post, ApiError> {
      let new_post = draft.into_new_post(self.clock.now())?;

      let mut tx = self.tx_manager.begin().await?;
      let post = self.post_repository.insert(&mut tx, &new_post).await?;
      tx.commit().await?;

      tracing::info!(id = %post.id(), "投稿を作成しました");
      Ok(post)
   }

   /// 投稿を部分更新する
   ///
   /// 日付・時刻の形式が不正な場合はロックを解放して 400 を返す。
   pub async fn update(&self, id: RecordId, draft: PostDraft) -> Result<Post, ApiError> {
      let mut tx = self.tx_manager.begin().await?;
      let current = self
         .post_repository
         .find_by_id_for_update(&mut tx, id)
         .await?
         .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;

      let updated = current.merge(draft)?;
      self.post_repository.update(&mut tx, &updated).await?;
      tx.commit().await?;

      Ok(updated)
   }

   pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
      let mut tx = self.tx_manager.begin().await?;
      if !self.post_repository.delete(&mut tx, id).await? {
         return Err(ApiError::NotFound(NOT_FOUND.to_string()));
      }
      tx.commit().await?;

      tracing::info!(%id, "投稿を削除しました");
      Ok(())
   }
}
