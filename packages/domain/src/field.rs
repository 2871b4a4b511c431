//! # 入力フィールド
//!
//! リクエストボディの各フィールドを「値あり / 値なし」の二値で表現する。
//!
//! ## 空値を未指定として扱う規則
//!
//! 以下の JSON 値はすべて「値なし」と判定する:
//!
//! | JSON 値 | 判定 |
//! |---------|------|
//! | キー自体が無い | 値なし |
//! | `null` | 値なし |
//! | `""` | 値なし |
//! | `false` | 値なし |
//! | `0`, `0.0` | 値なし |
//! | それ以外 | 値あり |
//!
//! 作成時の必須チェックと、更新時の「値ありなら置き換え、値なしなら既存値を維持」
//! の両方がこの判定を使う。結果として、更新 API でフィールドを空文字や
//! `null` にクリアすることはできない（既存クライアントとの互換のため維持している）。
//!
//! 値ありのフィールドは SQL にバインドするテキストへ変換して保持する:
//! 文字列はそのまま、`true` は `"true"`、配列・オブジェクトは JSON 表現。
//! 数値は小数部が 0 なら整数表記（`1.0` → `"1"`）、それ以外は JSON 表現。

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// 空値判定済みの入力フィールド
///
/// `#[serde(default)]` と組み合わせて、キーが無い場合も値なしとして扱う。
///
/// ```
/// use atividade_domain::field::Field;
///
/// assert!(Field::from("texto").is_present());
/// assert!(!Field::from("").is_present());
/// assert_eq!(Field::from("").or_keep("antigo".to_string()), "antigo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field(Option<String>);

impl Field {
   /// 値なしのフィールド
   pub fn absent() -> Self {
      Self(None)
   }

   /// JSON 値から空値判定を行って生成する
   pub fn from_json(value: &Value) -> Self {
      let text = match value {
         Value::Null | Value::Bool(false) => None,
         Value::Bool(true) => Some("true".to_string()),
         Value::Number(n) if n.as_f64() == Some(0.0) => None,
         Value::Number(n) => Some(number_text(n)),
         Value::String(s) if s.is_empty() => None,
         Value::String(s) => Some(s.clone()),
         Value::Array(_) | Value::Object(_) => Some(value.to_string()),
      };
      Self(text)
   }

   pub fn is_present(&self) -> bool {
      self.0.is_some()
   }

   pub fn as_deref(&self) -> Option<&str> {
      self.0.as_deref()
   }

   pub fn into_option(self) -> Option<String> {
      self.0
   }

   /// 値ありならその値、値なしなら `current` を返す
   pub fn or_keep(self, current: String) -> String {
      self.0.unwrap_or(current)
   }
}

/// 指数表記にならない範囲で小数部が 0 の値は整数として書く
fn number_text(n: &Number) -> String {
   match n.as_f64() {
      Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
      _ => n.to_string(),
   }
}

impl From<&str> for Field {
   fn from(value: &str) -> Self {
      Self::from_json(&Value::String(value.to_string()))
   }
}

impl From<String> for Field {
   fn from(value: String) -> Self {
      Self::from_json(&Value::String(value))
   }
}

impl<'de> Deserialize<'de> for Field {
   fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
   where
      D: Deserializer<'de>,
   {
      let value = Value::deserialize(deserializer)?;
      Ok(Self::from_json(&value))
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use serde_json::json;

   use super::*;

   #[rstest]
   #[case::null(json!(null))]
   #[case::空文字(json!(""))]
   #[case::false値(json!(false))]
   #[case::整数ゼロ(json!(0))]
   #[case::小数ゼロ(json!(0.0))]
   fn test_空値は値なしと判定される(#[case] value: Value) {
      assert_eq!(Field::from_json(&value), Field::absent());
   }

   #[rstest]
   #[case::文字列(json!("medium"), "medium")]
   #[case::空白のみ(json!(" "), " ")]
   #[case::true値(json!(true), "true")]
   #[case::整数(json!(42), "42")]
   #[case::負数(json!(-1.5), "-1.5")]
   #[case::小数部が0の小数(json!(1.0), "1")]
   #[case::小数部が0の負数(json!(-3.0), "-3")]
   #[case::大きな小数(json!(1e20), "100000000000000000000")]
   #[case::指数表記になる小数(json!(1e21), "1e21")]
   #[case::配列(json!([1, 2]), "[1,2]")]
   #[case::オブジェクト(json!({"a": 1}), r#"{"a":1}"#)]
   fn test_空値以外は値ありと判定されテキストに変換される(
      #[case] value: Value,
      #[case] expected: &str,
   ) {
      assert_eq!(Field::from_json(&value).as_deref(), Some(expected));
   }

   #[test]
   fn test_キーが無い場合はdefaultで値なしになる() {
      #[derive(Deserialize)]
      struct Body {
         #[serde(default)]
         nivel: Field,
      }

      let body: Body = serde_json::from_str("{}").unwrap();
      assert!(!body.nivel.is_present());
   }

   #[test]
   fn test_デシリアライズで空値判定が適用される() {
      #[derive(Deserialize)]
      struct Body {
         #[serde(default)]
         tema:  Field,
         #[serde(default)]
         nivel: Field,
      }

      let body: Body = serde_json::from_str(r#"{"tema": "", "nivel": "easy"}"#).unwrap();
      assert!(!body.tema.is_present());
      assert_eq!(body.nivel.as_deref(), Some("easy"));
   }

   #[test]
   fn test_or_keepは値ありなら新しい値を返す() {
      assert_eq!(Field::from("novo").or_keep("antigo".to_string()), "novo");
      assert_eq!(Field::absent().or_keep("antigo".to_string()), "antigo");
   }
}
