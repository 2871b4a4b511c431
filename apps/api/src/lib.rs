//! # Atividade API サーバー
//!
//! `questoes`（問題）と `post`（投稿）の CRUD を提供する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! HTTP ──▶ handler ──▶ usecase ──▶ repository (infra) ──▶ PostgreSQL
//!            │            │
//!            └─ extract   └─ domain（入力検証・部分更新のマージ）
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - 依存の組み立てとルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - パスパラメータ・JSON ボディの extractor
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ユースケース
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use atividade_api::{app_builder::{AppDependencies, build_app}, config::AppConfig};
//! use atividade_infra::db;
//!
//! let config = AppConfig::from_env()?;
//! let pool = db::create_pool(&config.database.url, config.database.max_connections)?;
//! let app = build_app(config.service.clone(), AppDependencies::postgres(pool));
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;
