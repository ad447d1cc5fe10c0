//! PostgreSQL-backed question bank

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE metacharacters so the term is matched as a plain substring
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn count_questions(&self, category: Option<i32>) -> StoreResult<i64> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
            "#,
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await
    }

    async fn page_questions(
        &self,
        category: Option<i32>,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<Question>> {
        let query = format!(
            r#"
            SELECT {}
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
            QUESTION_COLUMNS
        );

        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    async fn all_questions(&self) -> StoreResult<Vec<Question>> {
        let query = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        sqlx::query_as::<_, Question>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        let query = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(&self.pool)
            .await
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let query = format!(
            r#"
            SELECT {}
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
            QUESTION_COLUMNS
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(escape_like(term))
            .fetch_all(&self.pool)
            .await
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let query = format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(question.question)
            .bind(question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        // Dropping the transaction on an early `?` rolls it back
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
