use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;

/// Category the quiz is played in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    pub id: i32,
    /// Display label; informational only
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of the questions already served in this quiz
    #[serde(default, alias = "previous_questions")]
    pub previous_q: Vec<i32>,

    #[serde(alias = "category_quiz")]
    pub quiz_category: QuizCategoryDto,
}

/// Next question; absent once the category is exhausted
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_aliases() {
        let dto: QuizRequestDto = serde_json::from_str(
            r#"{"previous_questions": [3, 4], "category_quiz": {"id": 5, "type": "Entertainment"}}"#,
        )
        .unwrap();

        assert_eq!(dto.previous_q, vec![3, 4]);
        assert_eq!(dto.quiz_category.id, 5);
        assert_eq!(dto.quiz_category.label.as_deref(), Some("Entertainment"));
    }

    #[test]
    fn test_request_requires_category() {
        assert!(serde_json::from_str::<QuizRequestDto>(r#"{"previous_q": []}"#).is_err());
    }

    #[test]
    fn test_exhausted_response_omits_question() {
        let value = serde_json::to_value(QuizResponseDto::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
