//! # エラーレスポンス・メッセージレスポンス
//!
//! クライアントとの互換性を保つため、レスポンスボディは既存 API の形式
//! （`erro` / `mensagem` キー、ポルトガル語メッセージ）を維持する。
//!
//! ## 設計
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスコードは保持しない（API クレートの `IntoResponse` で決定する）
//! - 500 系の本文は固定文言とし、内部情報を含めない

use serde::{Deserialize, Serialize};

/// 500 系エラーの固定文言
const INTERNAL_ERROR: &str = "Erro interno do servidor";

/// 400 系エラーの固定文言
const INVALID_DATA: &str = "Dados inválidos";

/// エラーレスポンス
///
/// ```json
/// { "erro": "Dados inválidos", "mensagem": "Todos os campos (...) são obrigatórios." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub erro:     String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub mensagem: Option<String>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(erro: impl Into<String>, mensagem: Option<String>) -> Self {
      Self {
         erro: erro.into(),
         mensagem,
      }
   }

   /// 400 Bad Request（入力不備）
   pub fn invalid_data(mensagem: impl Into<String>) -> Self {
      Self::new(INVALID_DATA, Some(mensagem.into()))
   }

   /// 500 Internal Server Error
   ///
   /// 本文は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(INTERNAL_ERROR, None)
   }

   /// 500 Internal Server Error（利用者向けの補足メッセージ付き）
   pub fn internal_error_with(mensagem: impl Into<String>) -> Self {
      Self::new(INTERNAL_ERROR, Some(mensagem.into()))
   }
}

/// メッセージのみを返すレスポンス
///
/// 404 と、作成・更新・削除の成功通知で使用する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
   pub mensagem: String,
}

impl MessageResponse {
   pub fn new(mensagem: impl Into<String>) -> Self {
      Self {
         mensagem: mensagem.into(),
      }
   }
}
