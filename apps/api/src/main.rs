//! # Atividade API サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env から URL_BD などを読み込む）
//! cargo run -p atividade-api
//!
//! # 本番環境
//! URL_BD=postgres://... LOG_FORMAT=json cargo run -p atividade-api --release
//! ```
//!
//! 環境変数の一覧は [`atividade_api::config`] を参照。

use std::net::SocketAddr;

use anyhow::Context as _;
use atividade_api::{
   app_builder::{AppDependencies, build_app},
   config::AppConfig,
};
use atividade_infra::db;
use atividade_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(TracingConfig::from_env("atividade-api"));

   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

   // 接続プールは起動時に一度だけ作る。物理接続は最初のクエリで確立される
   let pool = db::create_pool(&config.database.url, config.database.max_connections)
      .context("接続 URL のパースに失敗しました")?;

   if config.database.run_migrations {
      db::run_migrations(&pool)
         .await
         .context("マイグレーションの適用に失敗しました")?;
      tracing::info!("マイグレーションを適用しました");
   }

   let app = build_app(config.service.clone(), AppDependencies::postgres(pool));

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("バインドアドレスのパースに失敗しました")?;
   let listener = TcpListener::bind(addr).await?;
   tracing::info!("サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("サーバーを停止しました");
   Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!(error = %e, "Ctrl+C ハンドラを登録できません");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
         Ok(mut signal) => {
            signal.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラを登録できません");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      () = ctrl_c => tracing::info!("Ctrl+C を受信しました。停止処理を開始します"),
      () = terminate => tracing::info!("SIGTERM を受信しました。停止処理を開始します"),
   }
}
