//! # ステータスハンドラ
//!
//! `GET /` で API の説明と DB の疎通状態を返す。
//!
//! ```json
//! { "message": "API para atividade", "author": "...", "statusBD": "ok" }
//! ```
//!
//! DB に接続できない場合も 200 を返し、`statusBD` にエラー内容をそのまま入れる。

use std::sync::Arc;

use atividade_infra::db;
use atividade_shared::StatusResponse;
use axum::{Json, extract::State};
use sqlx::PgPool;

use crate::config::ServiceInfo;

const STATUS_OK: &str = "ok";

/// ステータス API の共有状態
pub struct StatusState {
   pub pool:    PgPool,
   pub service: ServiceInfo,
}

/// GET /
#[tracing::instrument(skip_all)]
pub async fn status(State(state): State<Arc<StatusState>>) -> Json<StatusResponse> {
   let status_bd = match db::ping(&state.pool).await {
      Ok(()) => STATUS_OK.to_string(),
      Err(e) => {
         tracing::warn!(error = %e, "DB への疎通確認に失敗しました");
         e.to_string()
      }
   };

   Json(StatusResponse::new(
      &state.service.message,
      &state.service.author,
      status_bd,
   ))
}
