//! In-memory question bank for tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::{StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// Mirrors the PostgreSQL store's ordering and matching rules.
/// `fail_writes` makes inserts and deletes fail like a broken connection;
/// `fail_reads` does the same for every query.
#[derive(Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&self, label: &str) -> Category {
        let mut tables = self.tables.write().unwrap();
        let id = tables.categories.keys().next_back().map_or(1, |id| id + 1);
        let category = Category {
            id,
            label: label.to_string(),
        };
        tables.categories.insert(id, category.clone());
        category
    }

    pub fn add_question(&self, question: NewQuestion) -> Question {
        let mut tables = self.tables.write().unwrap();
        tables.next_question_id += 1;
        let row = Question {
            id: tables.next_question_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.insert(row.id, row.clone());
        row
    }

    pub fn question_count(&self) -> usize {
        self.tables.read().unwrap().questions.len()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check_readable(&self) -> StoreResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }

    fn select<F>(&self, filter: F) -> StoreResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        self.check_readable()?;
        Ok(self
            .tables
            .read()
            .unwrap()
            .questions
            .values()
            .filter(|q| filter(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check_readable()?;
        Ok(self.tables.read().unwrap().categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        self.check_readable()?;
        Ok(self.tables.read().unwrap().categories.get(&id).cloned())
    }

    async fn count_questions(&self, category: Option<i32>) -> StoreResult<i64> {
        let matches = self.select(|q| category.map_or(true, |c| q.category == c))?;
        Ok(matches.len() as i64)
    }

    async fn page_questions(
        &self,
        category: Option<i32>,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<Question>> {
        let matches = self.select(|q| category.map_or(true, |c| q.category == c))?;
        Ok(matches
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn all_questions(&self) -> StoreResult<Vec<Question>> {
        self.select(|_| true)
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        self.select(|q| q.category == category)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.select(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        self.check_writable()?;
        Ok(self.add_question(question))
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        self.check_writable()?;
        Ok(self.tables.write().unwrap().questions.remove(&id).is_some())
    }
}
