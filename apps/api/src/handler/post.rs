//! # 投稿ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /post` - 一覧
//! - `GET /post/{id}` - 1 件取得（オブジェクトで返す）
//! - `POST /post` - 作成（作成した行を返す）
//! - `PUT /post/{id}` - 部分更新（更新後の行を返す）
//! - `DELETE /post/{id}` - 削除
//!
//! `created_date` は `YYYY-MM-DD`、`created_time` は `HH:MM:SS[.ffffff]` の文字列で返す
//! （秒の小数部は PostgreSQL の `time` 型と同じくマイクロ秒まで、末尾の 0 は省く）。

use std::sync::Arc;

use atividade_domain::post::{Post, PostDraft};
use atividade_shared::MessageResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{
   error::ApiError,
   extract::{JsonBody, PathId},
   usecase::PostUseCaseImpl,
};

/// 投稿 API の共有状態
pub struct PostState {
   pub usecase: PostUseCaseImpl,
}

/// 投稿 DTO（`post` テーブルの 1 行）
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PostDto {
   pub id:            i64,
   pub name:          String,
   pub whatsapp:      String,
   pub race:          String,
   pub description:   Option<String>,
   pub instagram:     Option<String>,
   pub adorno:        Option<String>,
   pub color:         Option<String>,
   pub neighbordhood: Option<String>,
   pub reference:     Option<String>,
   pub created_date:  String,
   pub created_time:  String,
}

impl From<&Post> for PostDto {
   fn from(post: &Post) -> Self {
      Self {
         id:            post.id().as_i64(),
         name:          post.name().to_string(),
         whatsapp:      post.whatsapp().to_string(),
         race:          post.race().to_string(),
         description:   post.description().map(str::to_string),
         instagram:     post.instagram().map(str::to_string),
         adorno:        post.adorno().map(str::to_string),
         color:         post.color().map(str::to_string),
         neighbordhood: post.neighbordhood().map(str::to_string),
         reference:     post.reference().map(str::to_string),
         created_date:  post.created_date().format("%Y-%m-%d").to_string(),
         created_time:  format_time(post.created_time()),
      }
   }
}

/// PostgreSQL の `time` のテキスト表現に揃える
fn format_time(time: NaiveTime) -> String {
   if time.nanosecond() / 1_000 == 0 {
      return time.format("%H:%M:%S").to_string();
   }
   time
      .format("%H:%M:%S%.6f")
      .to_string()
      .trim_end_matches('0')
      .to_string()
}

/// 作成・更新のレスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PostWriteResponse {
   pub mensagem: String,
   pub post:     PostDto,
}

/// GET /post
#[tracing::instrument(skip_all)]
pub async fn list_posts(State(state): State<Arc<PostState>>) -> Result<impl IntoResponse, ApiError> {
   let posts = state
      .usecase
      .list()
      .await
      .map_err(|e| e.with_message("Não foi possível buscar os posts"))?;

   let items: Vec<PostDto> = posts.iter().map(PostDto::from).collect();
   Ok(Json(items))
}

/// GET /post/{id}
#[tracing::instrument(skip_all)]
pub async fn get_post(
   State(state): State<Arc<PostState>>,
   PathId(id): PathId,
) -> Result<impl IntoResponse, ApiError> {
   let post = state.usecase.get(id).await?;

   Ok(Json(PostDto::from(&post)))
}

/// POST /post
///
/// ## レスポンス
///
/// - `201 Created`: 作成された投稿
/// - `400 Bad Request`: 必須項目の欠落、日付・時刻の形式不正、不正な JSON
#[tracing::instrument(skip_all)]
pub async fn create_post(
   State(state): State<Arc<PostState>>,
   JsonBody(draft): JsonBody<PostDraft>,
) -> Result<impl IntoResponse, ApiError> {
   let post = state.usecase.create(draft).await?;

   Ok((
      StatusCode::CREATED,
      Json(PostWriteResponse {
         mensagem: "Post criado com sucesso!".to_string(),
         post:     PostDto::from(&post),
      }),
   ))
}

/// PUT /post/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_post(
   State(state): State<Arc<PostState>>,
   PathId(id): PathId,
   JsonBody(draft): JsonBody<PostDraft>,
) -> Result<impl IntoResponse, ApiError> {
   let post = state.usecase.update(id, draft).await?;

   Ok(Json(PostWriteResponse {
      mensagem: "Post atualizado com sucesso!".to_string(),
      post:     PostDto::from(&post),
   }))
}

/// DELETE /post/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_post(
   State(state): State<Arc<PostState>>,
   PathId(id): PathId,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.delete(id).await?;

   Ok(Json(MessageResponse::new("Post excluído com sucesso!")))
}
