//! # API エラーハンドリング
//!
//! ハンドラ・ユースケースのエラー定義と、HTTP レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError ─┐
//! InfraError ──┼─▶ ApiError ──IntoResponse──▶ StatusCode + JSON
//! 抽出失敗 ────┘
//! ```
//!
//! ## マッピング
//!
//! | ApiError | HTTP Status | ボディ |
//! |----------|-------------|--------|
//! | Validation | 400 | `{"erro":"Dados inválidos","mensagem":...}` |
//! | NotFound | 404 | `{"mensagem":...}` |
//! | Database | 500 | `{"erro":"Erro interno do servidor"[,"mensagem":...]}` |
//! | Internal | 500 | `{"erro":"Erro interno do servidor"}` |
//!
//! 500 系は詳細をログにのみ出力し、クライアントには返さない。

use atividade_domain::DomainError;
use atividade_infra::InfraError;
use atividade_shared::{ErrorResponse, MessageResponse};
use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 入力不備（400 Bad Request）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが存在しない（404 Not Found）
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー（500 Internal Server Error）
   ///
   /// `mensagem` はクライアントに返す補足メッセージ（内部情報は含めない）。
   #[error("データベースエラー: {source}")]
   Database {
      #[source]
      source:   InfraError,
      mensagem: Option<String>,
   },

   /// その他の内部エラー（500 Internal Server Error）
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl ApiError {
   /// データベースエラーにクライアント向けの補足メッセージを付ける
   ///
   /// それ以外のバリアントはそのまま返す。
   pub fn with_message(self, mensagem: impl Into<String>) -> Self {
      match self {
         ApiError::Database { source, .. } => ApiError::Database {
            source,
            mensagem: Some(mensagem.into()),
         },
         other => other,
      }
   }
}

impl From<InfraError> for ApiError {
   fn from(source: InfraError) -> Self {
      ApiError::Database {
         source,
         mensagem: None,
      }
   }
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::Validation(msg),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::invalid_data(msg)),
         )
            .into_response(),
         ApiError::NotFound(msg) => {
            (StatusCode::NOT_FOUND, Json(MessageResponse::new(msg))).into_response()
         }
         ApiError::Database { source, mensagem } => {
            tracing::error!(
               error = %source,
               span_trace = %source.span_trace(),
               "データベースエラー"
            );
            let body = match mensagem {
               Some(msg) => ErrorResponse::internal_error_with(msg),
               None => ErrorResponse::internal_error(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
         }
         ApiError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(ErrorResponse::internal_error()),
            )
               .into_response()
         }
      }
   }
}
