//! # カスタム extractor
//!
//! - [`PathId`]: パスパラメータ `{id}` を [`RecordId`] に変換する
//! - [`JsonBody`]: リクエストボディを寛容に JSON として読み取る
//!
//! どちらも失敗時は [`ApiError`] を返し、レスポンス形式を他のエラーと揃える。

use atividade_domain::value_objects::RecordId;
use axum::{
   body::Bytes,
   extract::{FromRequest, FromRequestParts, Path, Request},
   http::{header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

const INVALID_JSON: &str = "Corpo da requisição não é um JSON válido";

/// パスの `{id}` を行 ID として取り出す
///
/// 整数として解釈できない値は DB のキャスト失敗と同じ扱いとし、
/// 500（内部エラー）にする。
pub struct PathId(pub RecordId);

impl<S> FromRequestParts<S> for PathId
where
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      let Path(raw): Path<String> = Path::from_request_parts(parts, state)
         .await
         .map_err(|e| ApiError::Internal(format!("パスパラメータを取得できません: {e}")))?;

      let id = raw
         .parse::<RecordId>()
         .map_err(|e| ApiError::Internal(e.to_string()))?;

      Ok(Self(id))
   }
}

/// JSON ボディ
///
/// axum 標準の `Json` より寛容に読み取る:
///
/// - `Content-Type` が JSON でない、またはボディが空 → `T::default()`（`{}` 相当）
/// - トップレベルが配列 → `T::default()`（フィールドはすべて未指定）
/// - JSON として不正、またはトップレベルがスカラー → 400
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
   S: Send + Sync,
   T: DeserializeOwned + Default,
{
   type Rejection = ApiError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let is_json = req
         .headers()
         .get(header::CONTENT_TYPE)
         .and_then(|v| v.to_str().ok())
         .is_some_and(is_json_content_type);

      let bytes = Bytes::from_request(req, state)
         .await
         .map_err(|e| ApiError::Validation(format!("{INVALID_JSON}: {e}")))?;

      if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
         return Ok(Self(T::default()));
      }

      let value: Value =
         serde_json::from_slice(&bytes).map_err(|_| ApiError::Validation(INVALID_JSON.into()))?;

      match value {
         Value::Object(_) => serde_json::from_value(value)
            .map(Self)
            .map_err(|_| ApiError::Validation(INVALID_JSON.into())),
         Value::Array(_) => Ok(Self(T::default())),
         _ => Err(ApiError::Validation(INVALID_JSON.into())),
      }
   }
}

fn is_json_content_type(content_type: &str) -> bool {
   let mime = content_type
      .split(';')
      .next()
      .unwrap_or_default()
      .trim()
      .to_ascii_lowercase();
   mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
   use atividade_domain::{field::Field, question::QuestionDraft};
   use axum::{body::Body, http::Request as HttpRequest};
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   async fn extract(content_type: Option<&str>, body: &str) -> Result<QuestionDraft, ApiError> {
      let mut builder = HttpRequest::builder().method("POST").uri("/questoes");
      if let Some(ct) = content_type {
         builder = builder.header(header::CONTENT_TYPE, ct);
      }
      let request = builder.body(Body::from(body.to_string())).unwrap();

      JsonBody::<QuestionDraft>::from_request(request, &())
         .await
         .map(|JsonBody(draft)| draft)
   }

   #[tokio::test]
   async fn test_jsonオブジェクトを読み取れる() {
      let draft = extract(Some("application/json"), r#"{"nivel":"medium"}"#)
         .await
         .unwrap();

      assert_eq!(
         draft,
         QuestionDraft {
            nivel: Field::from("medium"),
            ..QuestionDraft::default()
         }
      );
   }

   #[rstest]
   #[case::空ボディ(Some("application/json"), "")]
   #[case::content_typeなし(None, r#"{"nivel":"medium"}"#)]
   #[case::テキスト(Some("text/plain"), r#"{"nivel":"medium"}"#)]
   #[case::配列(Some("application/json"), "[1, 2]")]
   #[tokio::test]
   async fn test_読み取れない場合は空のオブジェクトとして扱う(
      #[case] content_type: Option<&str>,
      #[case] body: &str,
   ) {
      let draft = extract(content_type, body).await.unwrap();

      assert_eq!(draft, QuestionDraft::default());
   }

   #[rstest]
   #[case::構文エラー("{nivel:")]
   #[case::スカラー("42")]
   #[tokio::test]
   async fn test_不正なjsonは400になる(#[case] body: &str) {
      let result = extract(Some("application/json; charset=utf-8"), body).await;

      assert!(matches!(
         result,
         Err(ApiError::Validation(msg)) if msg == INVALID_JSON
      ));
   }

   #[test]
   fn test_json系のcontent_typeを判定できる() {
      assert!(is_json_content_type("application/json"));
      assert!(is_json_content_type("Application/JSON; charset=utf-8"));
      assert!(is_json_content_type("application/merge-patch+json"));
      assert!(!is_json_content_type("text/plain"));
   }
}
