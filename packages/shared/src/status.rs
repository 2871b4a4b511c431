//! # ステータス応答
//!
//! ルート（`GET /`）のレスポンス型。

use serde::{Deserialize, Serialize};

/// ルートエンドポイント（`GET /`）のレスポンス
///
/// `statusBD` には DB 疎通確認の結果を入れる。成功時は `"ok"`、
/// 失敗時はエラーメッセージそのもの（このエンドポイントだけは
/// エラー内容を隠さない）。
///
/// ```
/// use atividade_shared::StatusResponse;
///
/// let response = StatusResponse::new("API para atividade", "Autor", "ok");
/// assert_eq!(response.status_bd, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
   pub message:   String,
   pub author:    String,
   #[serde(rename = "statusBD")]
   pub status_bd: String,
}

impl StatusResponse {
   pub fn new(
      message: impl Into<String>,
      author: impl Into<String>,
      status_bd: impl Into<String>,
   ) -> Self {
      Self {
         message:   message.into(),
         author:    author.into(),
         status_bd: status_bd.into(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_status_responseはstatus_bdをキャメルケースで出力する() {
      let response = StatusResponse::new("API para atividade", "Autor", "ok");
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "message": "API para atividade",
            "author": "Autor",
            "statusBD": "ok"
         })
      );
   }
}
