//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各リソースのハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、処理はユースケースに委譲する
//!
//! ```text
//! handler.rs
//! └── handler/
//!     ├── post.rs      # /post, /post/{id}
//!     ├── question.rs  # /questoes, /questoes/{id}
//!     └── status.rs    # /
//! ```

pub mod post;
pub mod question;
pub mod status;

pub use post::{PostState, create_post, delete_post, get_post, list_posts, update_post};
pub use question::{
   QuestionState,
   create_question,
   delete_question,
   get_question,
   list_questions,
   update_question,
};
pub use status::{StatusState, status};
