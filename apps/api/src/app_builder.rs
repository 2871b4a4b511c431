//! # アプリケーション構築
//!
//! DI（リポジトリ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use atividade_domain::clock::{Clock, SystemClock};
use atividade_infra::{
   db::{PgTransactionManager, TransactionManager},
   repository::{
      PostRepository,
      PostgresPostRepository,
      PostgresQuestionRepository,
      QuestionRepository,
   },
};
use axum::{Router, routing::get};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::{
   config::ServiceInfo,
   handler::{
      PostState,
      QuestionState,
      StatusState,
      create_post,
      create_question,
      delete_post,
      delete_question,
      get_post,
      get_question,
      list_posts,
      list_questions,
      status,
      update_post,
      update_question,
   },
   usecase::{PostUseCaseImpl, QuestionUseCaseImpl},
};

/// ルーターが必要とする依存
///
/// 本番では [`AppDependencies::postgres`] で構築する。
/// テストではリポジトリ等を差し替えて構築できる。
pub struct AppDependencies {
   pub pool:                PgPool,
   pub question_repository: Arc<dyn QuestionRepository>,
   pub post_repository:     Arc<dyn PostRepository>,
   pub tx_manager:          Arc<dyn TransactionManager>,
   pub clock:               Arc<dyn Clock>,
}

impl AppDependencies {
   /// 共有プールから PostgreSQL 実装の依存一式を構築する
   pub fn postgres(pool: PgPool) -> Self {
      Self {
         question_repository: Arc::new(PostgresQuestionRepository::new(pool.clone())),
         post_repository: Arc::new(PostgresPostRepository::new(pool.clone())),
         tx_manager: Arc::new(PgTransactionManager::new(pool.clone())),
         clock: Arc::new(SystemClock),
         pool,
      }
   }
}

/// ルーターを構築する
pub fn build_app(service: ServiceInfo, deps: AppDependencies) -> Router {
   let status_state = Arc::new(StatusState {
      pool: deps.pool,
      service,
   });
   let question_state = Arc::new(QuestionState {
      usecase: QuestionUseCaseImpl::new(deps.question_repository, deps.tx_manager.clone()),
   });
   let post_state = Arc::new(PostState {
      usecase: PostUseCaseImpl::new(deps.post_repository, deps.tx_manager, deps.clock),
   });

   Router::new()
      .route("/", get(status))
      .with_state(status_state)
      .route("/questoes", get(list_questions).post(create_question))
      .route(
         "/questoes/{id}",
         get(get_question)
            .put(update_question)
            .delete(delete_question),
      )
      .with_state(question_state)
      .route("/post", get(list_posts).post(create_post))
      .route(
         "/post/{id}",
         get(get_post).put(update_post).delete(delete_post),
      )
      .with_state(post_state)
      .layer(TraceLayer::new_for_http())
}
