//! Storage for the question bank
//!
//! Features talk to the database through the [`TriviaStore`] trait so the
//! backing store is injected per service instead of living in a global.
//! [`PgTriviaStore`] is the production implementation; tests use the
//! in-memory store.

#[cfg(test)]
mod memory;
mod postgres;

use async_trait::async_trait;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[cfg(test)]
pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Query and mutation operations over questions and categories.
///
/// Every listing is ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>>;

    /// Count questions, optionally restricted to one category
    async fn count_questions(&self, category: Option<i32>) -> StoreResult<i64>;

    /// One page of questions, optionally restricted to one category
    async fn page_questions(
        &self,
        category: Option<i32>,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<Question>>;

    async fn all_questions(&self) -> StoreResult<Vec<Question>>;

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    /// Wildcard characters in `term` match literally.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Delete inside a transaction; `Ok(false)` when no row has that id
    async fn delete_question(&self, id: i32) -> StoreResult<bool>;
}
