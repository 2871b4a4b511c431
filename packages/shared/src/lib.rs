//! # Atividade 共有ユーティリティ
//!
//! API・インフラ・ドメインの各クレートから利用される共通型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ構造とユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は API クレートの責務）
//! - トレーシング初期化は `observability` feature の有効時のみ公開する

pub mod error_response;
pub mod observability;
pub mod status;

pub use error_response::{ErrorResponse, MessageResponse};
pub use status::StatusResponse;
