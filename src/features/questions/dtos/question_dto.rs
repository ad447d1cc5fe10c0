use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::categories::dtos::CategoryLookup;

/// Question as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

/// Request DTO for creating a question. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(custom(function = "not_blank", message = "Question text is required"))]
    pub question: String,

    #[validate(custom(function = "not_blank", message = "Answer is required"))]
    pub answer: String,

    /// 1 (easiest) to 5 (hardest)
    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5"))]
    pub difficulty: i32,

    /// Id of an existing category
    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub category: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Response DTO for deleting a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub deleted: i32,
}

/// Page of questions with the full category map
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionResponseDto>,
    /// Number of questions across every page
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryLookup,
}

/// Page of questions in one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionResponseDto>,
    /// Number of questions in this category across every page
    pub total_questions: i64,
    /// Label of the requested category
    pub current_category: String,
}

/// Request DTO for question search
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchRequestDto {
    /// Substring to look for; omitted or null returns every question
    #[serde(default, alias = "searchTerm")]
    pub search: Option<String>,
}

/// Search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    pub questions: Vec<QuestionResponseDto>,
    /// Number of matches
    pub total_questions: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(question: &str, answer: &str, difficulty: i32, category: i32) -> CreateQuestionDto {
        CreateQuestionDto {
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty,
            category,
        }
    }

    #[test]
    fn test_valid_question_passes() {
        assert!(dto("Who painted the Mona Lisa?", "Da Vinci", 2, 2)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_blank_question_rejected() {
        let errors = dto("   ", "Da Vinci", 2, 2).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("question"));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let errors = dto("Who?", "", 2, 2).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("answer"));
    }

    #[test]
    fn test_difficulty_out_of_range_rejected() {
        assert!(dto("Who?", "Me", 0, 2).validate().is_err());
        assert!(dto("Who?", "Me", 6, 2).validate().is_err());
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result = serde_json::from_str::<CreateQuestionDto>(
            r#"{"answer": "Da Vinci", "difficulty": 2, "category": 2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_search_accepts_frontend_alias() {
        let dto: SearchRequestDto = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(dto.search.as_deref(), Some("title"));

        let dto: SearchRequestDto = serde_json::from_str("{}").unwrap();
        assert!(dto.search.is_none());
    }
}
