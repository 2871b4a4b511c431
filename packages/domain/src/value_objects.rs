//! # 共通値オブジェクト
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`RecordId`] | `i64` | DB が採番する行 ID（`BIGSERIAL`） |

use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 行 ID（値オブジェクト）
///
/// `questoes.id` / `post.id` を表す。採番は DB が行うため、
/// アプリケーション側で新規生成する手段は持たない。
///
/// ```rust
/// use atividade_domain::value_objects::RecordId;
///
/// let id: RecordId = "42".parse().unwrap();
/// assert_eq!(id.as_i64(), 42);
/// assert!("abc".parse::<RecordId>().is_err());
/// ```
#[derive(
   Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
pub struct RecordId(i64);

impl RecordId {
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

impl FromStr for RecordId {
   type Err = DomainError;

   /// パスパラメータの文字列から変換する
   ///
   /// 前後の空白は無視する（PostgreSQL の `bigint` キャストと同じ）。
   fn from_str(s: &str) -> Result<Self, Self::Err> {
      s.trim()
         .parse::<i64>()
         .map(Self)
         .map_err(|_| DomainError::Validation(format!("id inválido: {s}")))
   }
}
