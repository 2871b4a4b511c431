//! # Atividade インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理・疎通確認
//! - **トランザクション**: 書き込みを [`db::TxContext`] 経由に限定する
//! - **リポジトリ実装**: 問題・投稿の CRUD
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール、マイグレーション、トランザクション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - インメモリモック（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use atividade_infra::{db, repository::PostgresQuestionRepository};
//!
//! let pool = db::create_pool("postgres://localhost/atividade", 10)?;
//! let repository = PostgresQuestionRepository::new(pool.clone());
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
