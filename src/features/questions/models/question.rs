use sqlx::FromRow;

use crate::features::questions::dtos::{CreateQuestionDto, QuestionResponseDto};

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id; not enforced by a foreign key
    pub category: i32,
    pub difficulty: i32,
}

/// Insert payload; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question.trim().to_string(),
            answer: dto.answer.trim().to_string(),
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}
