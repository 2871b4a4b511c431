//! # Atividade ドメイン層
//!
//! 問題（`questoes`）と投稿（`post`）のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//!   ↘            ↑
//!     ───────────
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層エラー
//! - [`clock`] - 時刻プロバイダ（作成日時のデフォルト値に使用）
//! - [`field`] - 入力フィールドの真偽値判定（空値を未指定として扱う規則）
//! - [`value_objects`] - レコード ID
//! - [`question`] - 問題エンティティ
//! - [`post`] - 投稿エンティティ
//!
//! ## 使用例
//!
//! ```rust
//! use atividade_domain::{field::Field, question::QuestionDraft};
//!
//! let draft = QuestionDraft {
//!     enunciado:  Field::from("2+2?"),
//!     disciplina: Field::from("math"),
//!     tema:       Field::from("arith"),
//!     nivel:      Field::from("easy"),
//! };
//! let new_question = draft.into_new_question().unwrap();
//! assert_eq!(new_question.nivel, "easy");
//! ```

pub mod clock;
pub mod error;
pub mod field;
pub mod post;
pub mod question;
pub mod value_objects;

pub use error::DomainError;
