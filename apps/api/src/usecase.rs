//! # ユースケース層
//!
//! ハンドラから呼ばれ、リポジトリとトランザクションを組み合わせて処理を行う。
//! HTTP の詳細（ステータスコード、JSON 形式）は扱わない。

pub mod post;
pub mod question;

pub use post::PostUseCaseImpl;
pub use question::QuestionUseCaseImpl;
