//! # リポジトリ実装
//!
//! - **読み取り**はプールから直接実行する
//! - **書き込み**は `&mut TxContext` を必須引数とし、トランザクション内で実行する
//! - **テスタビリティ**: トレイト経由でモック可能（`mock` モジュール参照）

pub mod post_repository;
pub mod question_repository;

pub use post_repository::{PostRepository, PostgresPostRepository};
pub use question_repository::{PostgresQuestionRepository, QuestionRepository};
