use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ApiResponse, Empty, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        questions_handlers::list_questions_by_category,
        // Quiz
        quizzes_handlers::next_quiz_question,
    ),
    components(
        schemas(
            // Shared
            Empty,
            ErrorResponse,
            ApiResponse<Empty>,
            // Categories
            categories_dtos::CategoriesResponseDto,
            ApiResponse<categories_dtos::CategoriesResponseDto>,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::DeleteQuestionResponseDto,
            questions_dtos::QuestionPageDto,
            questions_dtos::CategoryQuestionsDto,
            questions_dtos::SearchRequestDto,
            questions_dtos::SearchQuestionsDto,
            ApiResponse<questions_dtos::DeleteQuestionResponseDto>,
            ApiResponse<questions_dtos::QuestionPageDto>,
            ApiResponse<questions_dtos::CategoryQuestionsDto>,
            ApiResponse<questions_dtos::SearchQuestionsDto>,
            // Quiz
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
            ApiResponse<quizzes_dtos::QuizResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Question bank listing, search and editing"),
        (name = "quiz", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Trivia question bank and quiz API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
