use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::modules::storage::TriviaStore;

/// Service picking quiz questions
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

/// Uniformly pick a question whose id is not in `previous`
fn pick_unseen<R>(questions: Vec<Question>, previous: &[i32], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i32> = previous.iter().copied().collect();
    let candidates: Vec<Question> = questions
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    candidates.choose(rng).cloned()
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Next question for the quiz, or an empty response when every
    /// question in the category has been served
    pub async fn next_question(&self, request: &QuizRequestDto) -> Result<QuizResponseDto> {
        let category = request.quiz_category.id;

        let questions = self
            .store
            .questions_in_category(category)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to load quiz questions for category {}: {:?}",
                    category,
                    e
                );
                AppError::Database(e)
            })?;

        let question = pick_unseen(questions, &request.previous_q, &mut rand::thread_rng());

        if question.is_none() {
            tracing::debug!(
                "Quiz exhausted: category={} ({}), served={}",
                category,
                request.quiz_category.label.as_deref().unwrap_or("-"),
                request.previous_q.len()
            );
        }

        Ok(QuizResponseDto {
            question: question.map(Into::into),
        })
    }
}
