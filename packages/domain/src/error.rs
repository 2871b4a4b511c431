//! # ドメイン層エラー定義
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落、日付・時刻の形式不正 |
//!
//! ## 使用例
//!
//! ```rust
//! use atividade_domain::DomainError;
//!
//! fn validate_name(name: &str) -> Result<(), DomainError> {
//!     if name.is_empty() {
//!         return Err(DomainError::Validation("name é obrigatório".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// メッセージはそのままクライアントへ返されるため、API の言語
/// （ポルトガル語）で記述する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// 入力値がビジネスルールに違反している
   #[error("{0}")]
   Validation(String),
}
