//! # 投稿（post）
//!
//! 投稿は必須 3 項目（`name`, `whatsapp`, `race`）と任意項目
//! （`description`, `instagram`, `adorno`, `color`, `neighbordhood`, `reference`）、
//! 作成日（`created_date`）・作成時刻（`created_time`）を持つ。
//!
//! ## 不変条件
//!
//! - 必須 3 項目は常に値を持つ
//! - `created_date` / `created_time` は作成時に未指定なら現在の UTC 日付・時刻になる
//!
//! 任意項目は未指定なら `NULL` として保存する。更新時のマージ規則は
//! [`Question`](crate::question::Question) と同じ。

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::Deserialize;

use crate::{DomainError, field::Field, value_objects::RecordId};

/// 作成時の必須項目（エラーメッセージに列挙する順）
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "whatsapp", "race"];

/// 投稿エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
   id:            RecordId,
   name:          String,
   whatsapp:      String,
   race:          String,
   description:   Option<String>,
   instagram:     Option<String>,
   adorno:        Option<String>,
   color:         Option<String>,
   neighbordhood: Option<String>,
   reference:     Option<String>,
   created_date:  NaiveDate,
   created_time:  NaiveTime,
}

/// DB から復元する際の全カラム
///
/// 引数が多いため、`from_db` には構造体で渡す。
pub struct PostRecord {
   pub id:            RecordId,
   pub name:          String,
   pub whatsapp:      String,
   pub race:          String,
   pub description:   Option<String>,
   pub instagram:     Option<String>,
   pub adorno:        Option<String>,
   pub color:         Option<String>,
   pub neighbordhood: Option<String>,
   pub reference:     Option<String>,
   pub created_date:  NaiveDate,
   pub created_time:  NaiveTime,
}

impl Post {
   pub fn from_db(record: PostRecord) -> Self {
      Self {
         id:            record.id,
         name:          record.name,
         whatsapp:      record.whatsapp,
         race:          record.race,
         description:   record.description,
         instagram:     record.instagram,
         adorno:        record.adorno,
         color:         record.color,
         neighbordhood: record.neighbordhood,
         reference:     record.reference,
         created_date:  record.created_date,
         created_time:  record.created_time,
      }
   }

   pub fn id(&self) -> RecordId {
      self.id
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn whatsapp(&self) -> &str {
      &self.whatsapp
   }

   pub fn race(&self) -> &str {
      &self.race
   }

   pub fn description(&self) -> Option<&str> {
      self.description.as_deref()
   }

   pub fn instagram(&self) -> Option<&str> {
      self.instagram.as_deref()
   }

   pub fn adorno(&self) -> Option<&str> {
      self.adorno.as_deref()
   }

   pub fn color(&self) -> Option<&str> {
      self.color.as_deref()
   }

   pub fn neighbordhood(&self) -> Option<&str> {
      self.neighbordhood.as_deref()
   }

   pub fn reference(&self) -> Option<&str> {
      self.reference.as_deref()
   }

   pub fn created_date(&self) -> NaiveDate {
      self.created_date
   }

   pub fn created_time(&self) -> NaiveTime {
      self.created_time
   }

   /// 部分更新を適用した新しい状態を返す
   ///
   /// 値ありのフィールドのみ置き換える。日付・時刻の形式が不正な場合はエラー。
   pub fn merge(self, draft: PostDraft) -> Result<Self, DomainError> {
      let created_date = match parse_date(&draft.created_date)? {
         Some(date) => date,
         None => self.created_date,
      };
      let created_time = match parse_time(&draft.created_time)? {
         Some(time) => time,
         None => self.created_time,
      };

      Ok(Self {
         id: self.id,
         name: draft.name.or_keep(self.name),
         whatsapp: draft.whatsapp.or_keep(self.whatsapp),
         race: draft.race.or_keep(self.race),
         description: draft.description.into_option().or(self.description),
         instagram: draft.instagram.into_option().or(self.instagram),
         adorno: draft.adorno.into_option().or(self.adorno),
         color: draft.color.into_option().or(self.color),
         neighbordhood: draft.neighbordhood.into_option().or(self.neighbordhood),
         reference: draft.reference.into_option().or(self.reference),
         created_date,
         created_time,
      })
   }
}

/// 挿入前の投稿（ID 未採番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
   pub name:          String,
   pub whatsapp:      String,
   pub race:          String,
   pub description:   Option<String>,
   pub instagram:     Option<String>,
   pub adorno:        Option<String>,
   pub color:         Option<String>,
   pub neighbordhood: Option<String>,
   pub reference:     Option<String>,
   pub created_date:  NaiveDate,
   pub created_time:  NaiveTime,
}

/// リクエストボディから読み取った投稿の入力
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostDraft {
   pub name:          Field,
   pub whatsapp:      Field,
   pub race:          Field,
   pub description:   Field,
   pub instagram:     Field,
   pub adorno:        Field,
   pub color:         Field,
   pub neighbordhood: Field,
   pub reference:     Field,
   pub created_date:  Field,
   pub created_time:  Field,
}

impl PostDraft {
   /// 必須チェックとデフォルト値の補完を行い、挿入用の値に変換する
   ///
   /// `now` は作成日・作成時刻が未指定の場合に使う（秒未満は切り捨てる）。
   pub fn into_new_post(self, now: DateTime<Utc>) -> Result<NewPost, DomainError> {
      let missing = || {
         DomainError::Validation(format!(
            "Todos os campos ({}) são obrigatórios.",
            REQUIRED_FIELDS.join(", ")
         ))
      };

      let name = self.name.into_option().ok_or_else(missing)?;
      let whatsapp = self.whatsapp.into_option().ok_or_else(missing)?;
      let race = self.race.into_option().ok_or_else(missing)?;

      let created_date = parse_date(&self.created_date)?.unwrap_or_else(|| now.date_naive());
      let created_time = parse_time(&self.created_time)?.unwrap_or_else(|| truncate_to_second(now));

      Ok(NewPost {
         name,
         whatsapp,
         race,
         description: self.description.into_option(),
         instagram: self.instagram.into_option(),
         adorno: self.adorno.into_option(),
         color: self.color.into_option(),
         neighbordhood: self.neighbordhood.into_option(),
         reference: self.reference.into_option(),
         created_date,
         created_time,
      })
   }
}

fn truncate_to_second(now: DateTime<Utc>) -> NaiveTime {
   let time = now.time();
   time.with_nanosecond(0).unwrap_or(time)
}

/// `YYYY-MM-DD` 形式の日付をパースする（値なしは `None`）
fn parse_date(field: &Field) -> Result<Option<NaiveDate>, DomainError> {
   let Some(raw) = field.as_deref() else {
      return Ok(None);
   };
   NaiveDate::parse_from_str(raw, "%Y-%m-%d")
      .map(Some)
      .map_err(|_| DomainError::Validation(format!("created_date inválida: {raw}")))
}

/// `HH:MM`, `HH:MM:SS`, `HH:MM:SS.fff` 形式の時刻をパースする（値なしは `None`）
fn parse_time(field: &Field) -> Result<Option<NaiveTime>, DomainError> {
   let Some(raw) = field.as_deref() else {
      return Ok(None);
   };
   NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
      .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
      .map(Some)
      .map_err(|_| DomainError::Validation(format!("created_time inválido: {raw}")))
}
