//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! atividade-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 各モックは `failing()` で生成すると、全メソッドが DB エラー相当の
//! [`InfraError`] を返す。

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use atividade_domain::{
   post::{NewPost, Post, PostRecord},
   question::{NewQuestion, Question},
   value_objects::RecordId,
};

use crate::{
   db::{TransactionManager, TxContext},
   error::InfraError,
   repository::{PostRepository, QuestionRepository},
};

const FAILURE_MESSAGE: &str = "connection refused";

/// ID 採番とエラー注入の共通状態
#[derive(Clone, Default)]
struct MockState {
   next_id: Arc<AtomicI64>,
   failing: Arc<AtomicBool>,
}

impl MockState {
   fn next_id(&self) -> RecordId {
      RecordId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
   }

   fn check(&self) -> Result<(), InfraError> {
      if self.failing.load(Ordering::SeqCst) {
         return Err(InfraError::unexpected(FAILURE_MESSAGE));
      }
      Ok(())
   }
}

// ===== MockQuestionRepository =====

#[derive(Clone, Default)]
pub struct MockQuestionRepository {
   questions: Arc<Mutex<Vec<Question>>>,
   state:     MockState,
}

impl MockQuestionRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 全メソッドがエラーを返すモックを作成する
   pub fn failing() -> Self {
      let repo = Self::default();
      repo.state.failing.store(true, Ordering::SeqCst);
      repo
   }

   /// 初期データを追加し、採番済みのエンティティを返す
   pub fn seed(&self, question: NewQuestion) -> Question {
      let stored = Question::from_db(
         self.state.next_id(),
         question.enunciado,
         question.disciplina,
         question.tema,
         question.nivel,
      );
      self.questions.lock().unwrap().push(stored.clone());
      stored
   }

   /// 現在の保存内容
   pub fn snapshot(&self) -> Vec<Question> {
      self.questions.lock().unwrap().clone()
   }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
   async fn find_all(&self) -> Result<Vec<Question>, InfraError> {
      self.state.check()?;
      Ok(self.snapshot())
   }

   async fn find_by_id(&self, id: RecordId) -> Result<Option<Question>, InfraError> {
      self.state.check()?;
      Ok(self
         .questions
         .lock()
         .unwrap()
         .iter()
         .find(|q| q.id() == id)
         .cloned())
   }

   async fn find_by_id_for_update(
      &self,
      _tx: &mut TxContext,
      id: RecordId,
   ) -> Result<Option<Question>, InfraError> {
      self.find_by_id(id).await
   }

   async fn insert(
      &self,
      _tx: &mut TxContext,
      question: &NewQuestion,
   ) -> Result<Question, InfraError> {
      self.state.check()?;
      Ok(self.seed(question.clone()))
   }

   async fn update(&self, _tx: &mut TxContext, question: &Question) -> Result<(), InfraError> {
      self.state.check()?;
      let mut questions = self.questions.lock().unwrap();
      if let Some(pos) = questions.iter().position(|q| q.id() == question.id()) {
         questions[pos] = question.clone();
      }
      Ok(())
   }

   async fn delete(&self, _tx: &mut TxContext, id: RecordId) -> Result<bool, InfraError> {
      self.state.check()?;
      let mut questions = self.questions.lock().unwrap();
      let before = questions.len();
      questions.retain(|q| q.id() != id);
      Ok(questions.len() < before)
   }
}

// ===== MockPostRepository =====

#[derive(Clone, Default)]
pub struct MockPostRepository {
   posts: Arc<Mutex<Vec<Post>>>,
   state: MockState,
}

impl MockPostRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn failing() -> Self {
      let repo = Self::default();
      repo.state.failing.store(true, Ordering::SeqCst);
      repo
   }

   pub fn seed(&self, post: NewPost) -> Post {
      let stored = Post::from_db(PostRecord {
         id:            self.state.next_id(),
         name:          post.name,
         whatsapp:      post.whatsapp,
         race:          post.race,
         description:   post.description,
         instagram:     post.instagram,
         adorno:        post.adorno,
         color:         post.color,
         neighbordhood: post.neighbordhood,
         reference:     post.reference,
         created_date:  post.created_date,
         created_time:  post.created_time,
      });
      self.posts.lock().unwrap().push(stored.clone());
      stored
   }

   pub fn snapshot(&self) -> Vec<Post> {
      self.posts.lock().unwrap().clone()
   }
}

#[async_trait]
impl PostRepository for MockPostRepository {
   async fn find_all(&self) -> Result<Vec<Post>, InfraError> {
      self.state.check()?;
      Ok(self.snapshot())
   }

   async fn find_by_id(&self, id: RecordId) -> Result<Option<Post>, InfraError> {
      self.state.check()?;
      Ok(self
         .posts
         .lock()
         .unwrap()
         .iter()
         .find(|p| p.id() == id)
         .cloned())
   }

   async fn find_by_id_for_update(
      &self,
      _tx: &mut TxContext,
      id: RecordId,
   ) -> Result<Option<Post>, InfraError> {
      self.find_by_id(id).await
   }

   async fn insert(&self, _tx: &mut TxContext, post: &NewPost) -> Result<Post, InfraError> {
      self.state.check()?;
      Ok(self.seed(post.clone()))
   }

   async fn update(&self, _tx: &mut TxContext, post: &Post) -> Result<(), InfraError> {
      self.state.check()?;
      let mut posts = self.posts.lock().unwrap();
      if let Some(pos) = posts.iter().position(|p| p.id() == post.id()) {
         posts[pos] = post.clone();
      }
      Ok(())
   }

   async fn delete(&self, _tx: &mut TxContext, id: RecordId) -> Result<bool, InfraError> {
      self.state.check()?;
      let mut posts = self.posts.lock().unwrap();
      let before = posts.len();
      posts.retain(|p| p.id() != id);
      Ok(posts.len() < before)
   }
}

// ===== MockTransactionManager =====

/// `TxContext::mock()` を返す TransactionManager
pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
   async fn begin(&self) -> Result<TxContext, InfraError> {
      Ok(TxContext::mock())
   }
}
