use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CategoryQuestionsDto, CreateQuestionDto, DeleteQuestionResponseDto, QuestionPageDto,
    SearchQuestionsDto, SearchRequestDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, Empty, ErrorResponse, PaginationQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of questions", body = ApiResponse<QuestionPageDto>),
        (status = 404, description = "The question bank is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<QuestionPageDto>>> {
    let page = service.list(&page).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = ApiResponse<Empty>),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<ApiResponse<Empty>>> {
    dto.validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    service.create(dto).await?;
    Ok(Json(ApiResponse::success(Empty::default())))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = ApiResponse<DeleteQuestionResponseDto>),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<DeleteQuestionResponseDto>>> {
    let deleted = service.delete(id).await?;
    Ok(Json(ApiResponse::success(DeleteQuestionResponseDto {
        deleted,
    })))
}

/// Search questions by text
///
/// Case-insensitive substring match. Without a search term every question is returned.
#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Matching questions", body = ApiResponse<SearchQuestionsDto>),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchRequestDto>,
) -> Result<Json<ApiResponse<SearchQuestionsDto>>> {
    let results = service.search(dto.search.as_deref()).await?;
    Ok(Json(ApiResponse::success(results)))
}

/// List questions in one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = ApiResponse<CategoryQuestionsDto>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(page): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<CategoryQuestionsDto>>> {
    let page = service.list_by_category(category_id, &page).await?;
    Ok(Json(ApiResponse::success(page)))
}
