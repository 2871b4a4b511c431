//! # 問題ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /questoes` - 一覧
//! - `GET /questoes/{id}` - 1 件取得（**配列**で返す）
//! - `POST /questoes` - 作成
//! - `PUT /questoes/{id}` - 部分更新
//! - `DELETE /questoes/{id}` - 削除

use std::sync::Arc;

use atividade_domain::question::{Question, QuestionDraft};
use atividade_shared::MessageResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
   error::ApiError,
   extract::{JsonBody, PathId},
   usecase::QuestionUseCaseImpl,
};

/// 問題 API の共有状態
pub struct QuestionState {
   pub usecase: QuestionUseCaseImpl,
}

/// 問題 DTO（`questoes` テーブルの 1 行）
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuestionDto {
   pub id:         i64,
   pub enunciado:  String,
   pub disciplina: String,
   pub tema:       String,
   pub nivel:      String,
}

impl From<&Question> for QuestionDto {
   fn from(question: &Question) -> Self {
      Self {
         id:         question.id().as_i64(),
         enunciado:  question.enunciado().to_string(),
         disciplina: question.disciplina().to_string(),
         tema:       question.tema().to_string(),
         nivel:      question.nivel().to_string(),
      }
   }
}

/// GET /questoes
#[tracing::instrument(skip_all)]
pub async fn list_questions(
   State(state): State<Arc<QuestionState>>,
) -> Result<impl IntoResponse, ApiError> {
   let questions = state
      .usecase
      .list()
      .await
      .map_err(|e| e.with_message("Não foi possível buscar as questões"))?;

   let items: Vec<QuestionDto> = questions.iter().map(QuestionDto::from).collect();
   Ok(Json(items))
}

/// GET /questoes/{id}
///
/// 見つかった行を配列で返す。
#[tracing::instrument(skip_all)]
pub async fn get_question(
   State(state): State<Arc<QuestionState>>,
   PathId(id): PathId,
) -> Result<impl IntoResponse, ApiError> {
   let question = state.usecase.get(id).await?;

   Ok(Json(vec![QuestionDto::from(&question)]))
}

/// POST /questoes
///
/// ## レスポンス
///
/// - `201 Created`: 作成成功
/// - `400 Bad Request`: 必須項目の欠落、不正な JSON
#[tracing::instrument(skip_all)]
pub async fn create_question(
   State(state): State<Arc<QuestionState>>,
   JsonBody(draft): JsonBody<QuestionDraft>,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.create(draft).await?;

   Ok((
      StatusCode::CREATED,
      Json(MessageResponse::new("Questão criada com sucesso!")),
   ))
}

/// PUT /questoes/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_question(
   State(state): State<Arc<QuestionState>>,
   PathId(id): PathId,
   JsonBody(draft): JsonBody<QuestionDraft>,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.update(id, draft).await?;

   Ok(Json(MessageResponse::new("Questão atualizada com sucesso!")))
}

/// DELETE /questoes/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_question(
   State(state): State<Arc<QuestionState>>,
   PathId(id): PathId,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.delete(id).await?;

   Ok(Json(MessageResponse::new("Questão excluida com sucesso!!")))
}

#[cfg(test)]
mod tests {
   use atividade_infra::mock::{MockQuestionRepository, MockTransactionManager};
   use axum::{
      Router,
      body::Body,
      http::{Method, Request},
      response::Response,
      routing::get,
   };
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use serde_json::{Value, json};
   use tower::ServiceExt;

   use super::*;

   // --- テスト用ヘルパー ---

   fn create_test_app(repo: MockQuestionRepository) -> Router {
      let state = Arc::new(QuestionState {
         usecase: QuestionUseCaseImpl::new(Arc::new(repo), Arc::new(MockTransactionManager)),
      });
      Router::new()
         .route("/questoes", get(list_questions).post(create_question))
         .route(
            "/questoes/{id}",
            get(get_question)
               .put(update_question)
               .delete(delete_question),
         )
         .with_state(state)
   }

   fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
      Request::builder()
         .method(method)
         .uri(uri)
         .header("content-type", "application/json")
         .body(Body::from(body.to_string()))
         .unwrap()
   }

   fn empty_request(method: Method, uri: &str) -> Request<Body> {
      Request::builder()
         .method(method)
         .uri(uri)
         .body(Body::empty())
         .unwrap()
   }

   async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
      let response: Response = app.clone().oneshot(request).await.unwrap();
      let status = response.status();
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      (status, serde_json::from_slice(&bytes).unwrap())
   }

   fn full_body() -> Value {
      json!({
         "enunciado": "2+2?",
         "disciplina": "math",
         "tema": "arith",
         "nivel": "easy"
      })
   }

   // --- テストケース ---

   #[tokio::test]
   async fn test_作成から削除までの一連の操作() {
      let sut = create_test_app(MockQuestionRepository::new());

      // 作成
      let (status, body) = send(&sut, json_request(Method::POST, "/questoes", full_body())).await;
      assert_eq!(status, StatusCode::CREATED);
      assert_eq!(body, json!({"mensagem": "Questão criada com sucesso!"}));

      // 取得（配列で返る）
      let (status, body) = send(&sut, empty_request(Method::GET, "/questoes/1")).await;
      assert_eq!(status, StatusCode::OK);
      assert_eq!(
         body,
         json!([{
            "id": 1,
            "enunciado": "2+2?",
            "disciplina": "math",
            "tema": "arith",
            "nivel": "easy"
         }])
      );

      // 部分更新
      let (status, body) = send(
         &sut,
         json_request(Method::PUT, "/questoes/1", json!({"nivel": "medium"})),
      )
      .await;
      assert_eq!(status, StatusCode::OK);
      assert_eq!(body, json!({"mensagem": "Questão atualizada com sucesso!"}));

      let (_, body) = send(&sut, empty_request(Method::GET, "/questoes/1")).await;
      assert_eq!(body[0]["nivel"], "medium");
      assert_eq!(body[0]["enunciado"], "2+2?");
      assert_eq!(body[0]["disciplina"], "math");
      assert_eq!(body[0]["tema"], "arith");

      // 削除
      let (status, body) = send(&sut, empty_request(Method::DELETE, "/questoes/1")).await;
      assert_eq!(status, StatusCode::OK);
      assert_eq!(body, json!({"mensagem": "Questão excluida com sucesso!!"}));

      let (status, body) = send(&sut, empty_request(Method::GET, "/questoes/1")).await;
      assert_eq!(status, StatusCode::NOT_FOUND);
      assert_eq!(body, json!({"mensagem": "Questão não encontrada"}));
   }

   #[rstest]
   #[case::欠落(json!({"enunciado": "2+2?", "disciplina": "math", "tema": "arith"}))]
   #[case::空文字(json!({"enunciado": "", "disciplina": "math", "tema": "arith", "nivel": "easy"}))]
   #[case::null(json!({"enunciado": "2+2?", "disciplina": null, "tema": "arith", "nivel": "easy"}))]
   #[case::ゼロ(json!({"enunciado": "2+2?", "disciplina": "math", "tema": 0, "nivel": "easy"}))]
   #[case::false値(json!({"enunciado": "2+2?", "disciplina": "math", "tema": "arith", "nivel": false}))]
   #[tokio::test]
   async fn test_必須項目が値なしなら400で何も作成しない(#[case] body: Value) {
      let repo = MockQuestionRepository::new();
      let sut = create_test_app(repo.clone());

      let (status, response) = send(&sut, json_request(Method::POST, "/questoes", body)).await;

      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(
         response,
         json!({
            "erro": "Dados inválidos",
            "mensagem": "Todos os campos (enunciado, disciplina, tema, nivel) são obrigatórios."
         })
      );
      assert!(repo.snapshot().is_empty());
   }

   #[tokio::test]
   async fn test_数値やtrueは文字列として保存される() {
      let repo = MockQuestionRepository::new();
      let sut = create_test_app(repo.clone());
      let body = json!({"enunciado": "2+2?", "disciplina": true, "tema": 4, "nivel": 1.5});

      let (status, _) = send(&sut, json_request(Method::POST, "/questoes", body)).await;

      assert_eq!(status, StatusCode::CREATED);
      let stored = &repo.snapshot()[0];
      assert_eq!(stored.disciplina(), "true");
      assert_eq!(stored.tema(), "4");
      assert_eq!(stored.nivel(), "1.5");
   }

   #[tokio::test]
   async fn test_不正なjsonは400() {
      let sut = create_test_app(MockQuestionRepository::new());
      let request = Request::builder()
         .method(Method::POST)
         .uri("/questoes")
         .header("content-type", "application/json")
         .body(Body::from("{enunciado"))
         .unwrap();

      let (status, body) = send(&sut, request).await;

      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(
         body,
         json!({
            "erro": "Dados inválidos",
            "mensagem": "Corpo da requisição não é um JSON válido"
         })
      );
   }

   #[tokio::test]
   async fn test_一覧は全件を配列で返す() {
      let sut = create_test_app(MockQuestionRepository::new());
      send(&sut, json_request(Method::POST, "/questoes", full_body())).await;
      send(&sut, json_request(Method::POST, "/questoes", full_body())).await;

      let (status, body) = send(&sut, empty_request(Method::GET, "/questoes")).await;

      assert_eq!(status, StatusCode::OK);
      let ids: Vec<i64> = body
         .as_array()
         .unwrap()
         .iter()
         .map(|q| q["id"].as_i64().unwrap())
         .collect();
      assert_eq!(ids, vec![1, 2]);
   }

   #[tokio::test]
   async fn test_一覧取得の失敗は500で補足メッセージを返す() {
      let sut = create_test_app(MockQuestionRepository::failing());

      let (status, body) = send(&sut, empty_request(Method::GET, "/questoes")).await;

      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(
         body,
         json!({
            "erro": "Erro interno do servidor",
            "mensagem": "Não foi possível buscar as questões"
         })
      );
   }

   #[rstest]
   #[case::取得(Method::GET)]
   #[case::削除(Method::DELETE)]
   #[tokio::test]
   async fn test_dbエラーは500で詳細を返さない(#[case] method: Method) {
      let sut = create_test_app(MockQuestionRepository::failing());

      let (status, body) = send(&sut, empty_request(method, "/questoes/1")).await;

      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body, json!({"erro": "Erro interno do servidor"}));
   }

   #[tokio::test]
   async fn test_整数でないidは500() {
      let sut = create_test_app(MockQuestionRepository::new());

      let (status, body) = send(&sut, empty_request(Method::GET, "/questoes/abc")).await;

      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body, json!({"erro": "Erro interno do servidor"}));
   }

   #[rstest]
   #[case::更新(Method::PUT)]
   #[case::削除(Method::DELETE)]
   #[tokio::test]
   async fn test_存在しないidは404(#[case] method: Method) {
      let sut = create_test_app(MockQuestionRepository::new());

      let (status, body) = send(
         &sut,
         json_request(method, "/questoes/42", json!({"nivel": "hard"})),
      )
      .await;

      assert_eq!(status, StatusCode::NOT_FOUND);
      assert_eq!(body, json!({"mensagem": "Questão não encontrada"}));
   }

   #[tokio::test]
   async fn test_空ボディの更新は既存値を維持する() {
      let repo = MockQuestionRepository::new();
      let sut = create_test_app(repo.clone());
      send(&sut, json_request(Method::POST, "/questoes", full_body())).await;
      let before = repo.snapshot();

      let (status, _) = send(&sut, empty_request(Method::PUT, "/questoes/1")).await;

      assert_eq!(status, StatusCode::OK);
      assert_eq!(repo.snapshot(), before);
   }
}
