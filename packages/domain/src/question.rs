//! # 問題（questoes）
//!
//! 問題は `enunciado`（問題文）・`disciplina`（科目）・`tema`（テーマ）・
//! `nivel`（難易度）の 4 項目を持つフラットなエンティティ。
//!
//! ## 不変条件
//!
//! - 4 項目はすべて作成後に非 NULL
//!
//! ## ライフサイクル
//!
//! ```text
//! QuestionDraft ──into_new_question()──▶ NewQuestion ──INSERT──▶ Question
//!                                                                  │
//!                 QuestionDraft ──────────── merge() ──────────────┘
//! ```
//!
//! 更新は「値ありのフィールドだけ置き換え、それ以外は既存値を維持」する
//! （[`field`](crate::field) の空値判定規則に従う）。

use serde::Deserialize;

use crate::{DomainError, field::Field, value_objects::RecordId};

/// 作成時の必須項目（エラーメッセージに列挙する順）
pub const REQUIRED_FIELDS: [&str; 4] = ["enunciado", "disciplina", "tema", "nivel"];

/// 問題エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
   id:         RecordId,
   enunciado:  String,
   disciplina: String,
   tema:       String,
   nivel:      String,
}

impl Question {
   /// DB から取得した値で復元する
   pub fn from_db(
      id: RecordId,
      enunciado: String,
      disciplina: String,
      tema: String,
      nivel: String,
   ) -> Self {
      Self {
         id,
         enunciado,
         disciplina,
         tema,
         nivel,
      }
   }

   pub fn id(&self) -> RecordId {
      self.id
   }

   pub fn enunciado(&self) -> &str {
      &self.enunciado
   }

   pub fn disciplina(&self) -> &str {
      &self.disciplina
   }

   pub fn tema(&self) -> &str {
      &self.tema
   }

   pub fn nivel(&self) -> &str {
      &self.nivel
   }

   /// 部分更新を適用した新しい状態を返す
   ///
   /// 値ありのフィールドのみ置き換える。ID は変わらない。
   pub fn merge(self, draft: QuestionDraft) -> Self {
      Self {
         id:         self.id,
         enunciado:  draft.enunciado.or_keep(self.enunciado),
         disciplina: draft.disciplina.or_keep(self.disciplina),
         tema:       draft.tema.or_keep(self.tema),
         nivel:      draft.nivel.or_keep(self.nivel),
      }
   }
}

/// 挿入前の問題（ID 未採番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
   pub enunciado:  String,
   pub disciplina: String,
   pub tema:       String,
   pub nivel:      String,
}

/// リクエストボディから読み取った問題の入力
///
/// 作成（POST）と部分更新（PUT）の両方で使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionDraft {
   pub enunciado:  Field,
   pub disciplina: Field,
   pub tema:       Field,
   pub nivel:      Field,
}

impl QuestionDraft {
   /// 必須チェックを行い、挿入用の値に変換する
   ///
   /// 1 つでも値なしの項目があれば、全必須項目を列挙したエラーを返す。
   pub fn into_new_question(self) -> Result<NewQuestion, DomainError> {
      let missing = || {
         DomainError::Validation(format!(
            "Todos os campos ({}) são obrigatórios.",
            REQUIRED_FIELDS.join(", ")
         ))
      };

      Ok(NewQuestion {
         enunciado:  self.enunciado.into_option().ok_or_else(missing)?,
         disciplina: self.disciplina.into_option().ok_or_else(missing)?,
         tema:       self.tema.into_option().ok_or_else(missing)?,
         nivel:      self.nivel.into_option().ok_or_else(missing)?,
      })
   }
}
