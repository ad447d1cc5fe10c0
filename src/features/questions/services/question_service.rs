use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::CategoryService;
use crate::features::questions::dtos::{
    CategoryQuestionsDto, CreateQuestionDto, QuestionPageDto, QuestionResponseDto,
    SearchQuestionsDto,
};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::storage::TriviaStore;
use crate::shared::types::PaginationQuery;

/// Service for question listing, search and mutation
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    categories: Arc<CategoryService>,
}

fn to_dtos(questions: Vec<Question>) -> Vec<QuestionResponseDto> {
    questions.into_iter().map(QuestionResponseDto::from).collect()
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>, categories: Arc<CategoryService>) -> Self {
        Self { store, categories }
    }

    /// One page of all questions plus the category map.
    ///
    /// An empty question bank is reported as 404, not as an empty page.
    pub async fn list(&self, page: &PaginationQuery) -> Result<QuestionPageDto> {
        let total_questions = self.count(None).await?;
        if total_questions == 0 {
            return Err(AppError::NotFound("no questions".to_string()));
        }

        let questions = self.page(None, page).await?;
        let categories = self.categories.lookup().await?;

        Ok(QuestionPageDto {
            questions: to_dtos(questions),
            total_questions,
            categories,
        })
    }

    /// One page of the questions in `category_id`.
    ///
    /// `total_questions` counts this category only.
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: &PaginationQuery,
    ) -> Result<CategoryQuestionsDto> {
        let category = self.categories.get(category_id).await?;

        let total_questions = self.count(Some(category.id)).await?;
        let questions = self.page(Some(category.id), page).await?;

        Ok(CategoryQuestionsDto {
            questions: to_dtos(questions),
            total_questions,
            current_category: category.label,
        })
    }

    /// Case-insensitive substring search; `None` returns every question
    pub async fn search(&self, term: Option<&str>) -> Result<SearchQuestionsDto> {
        let result = match term {
            Some(term) => self.store.search_questions(term).await,
            None => self.store.all_questions().await,
        };

        let questions = result.map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SearchQuestionsDto {
            total_questions: questions.len() as i64,
            questions: to_dtos(questions),
        })
    }

    /// Insert a question after validating it, returning the new id.
    /// Nothing is written on rejection and every failure is a 422.
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<i32> {
        let category_exists = self.categories.exists(dto.category).await.map_err(|e| {
            tracing::error!("Failed to check category {}: {:?}", dto.category, e);
            AppError::UnprocessableEntity("question could not be stored".to_string())
        })?;

        if !category_exists {
            return Err(AppError::UnprocessableEntity(format!(
                "Category {} does not exist",
                dto.category
            )));
        }

        let question = self
            .store
            .insert_question(NewQuestion::from(dto))
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert question: {:?}", e);
                AppError::UnprocessableEntity("question could not be stored".to_string())
            })?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(question.id)
    }

    /// Delete a question by id, returning the deleted id
    pub async fn delete(&self, id: i32) -> Result<i32> {
        let deleted = self.store.delete_question(id).await.map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::UnprocessableEntity(format!("question {} could not be deleted", id))
        })?;

        if !deleted {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(id)
    }

    async fn count(&self, category: Option<i32>) -> Result<i64> {
        self.store.count_questions(category).await.map_err(|e| {
            tracing::error!("Failed to count questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn page(&self, category: Option<i32>, page: &PaginationQuery) -> Result<Vec<Question>> {
        self.store
            .page_questions(category, page.offset(), page.limit())
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions: {:?}", e);
                AppError::Database(e)
            })
    }
}
