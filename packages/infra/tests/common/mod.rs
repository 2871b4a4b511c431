//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use atividade_domain::{post::NewPost, question::NewQuestion};
use atividade_infra::db::{PgTransactionManager, TransactionManager, TxContext};
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

/// トランザクションを開始する
pub async fn begin(pool: &PgPool) -> TxContext {
   PgTransactionManager::new(pool.clone())
      .begin()
      .await
      .expect("トランザクション開始に失敗")
}

pub fn new_question(enunciado: &str) -> NewQuestion {
   NewQuestion {
      enunciado:  enunciado.to_string(),
      disciplina: "math".to_string(),
      tema:       "arith".to_string(),
      nivel:      "easy".to_string(),
   }
}

/// 任意項目がすべて NULL の投稿
pub fn new_post(name: &str) -> NewPost {
   NewPost {
      name:          name.to_string(),
      whatsapp:      "+55 11 99999-0000".to_string(),
      race:          "vira-lata".to_string(),
      description:   None,
      instagram:     None,
      adorno:        None,
      color:         None,
      neighbordhood: None,
      reference:     None,
      created_date:  NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
      created_time:  NaiveTime::from_hms_opt(13, 45, 30).unwrap(),
   }
}
