//! HTTP features of the trivia API

pub mod categories;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::Router;

use crate::core::middleware;
use crate::modules::storage::TriviaStore;
use categories::CategoryService;
use questions::QuestionService;
use quizzes::QuizService;

/// All API routes over one injected store, with JSON fallbacks for
/// unknown paths and wrong methods
pub fn router(store: Arc<dyn TriviaStore>) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(
        Arc::clone(&store),
        Arc::clone(&category_service),
    ));
    let quiz_service = Arc::new(QuizService::new(store));

    Router::new()
        .merge(categories::routes::routes(category_service))
        .merge(questions::routes::routes(question_service))
        .merge(quizzes::routes::routes(quiz_service))
        .fallback(middleware::not_found)
        .method_not_allowed_fallback(middleware::method_not_allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seeded_store, test_server, with_questions};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_unknown_route_uses_error_body() {
        let server = test_server(router(seeded_store()));

        let response = server.get("/nope").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "success": false,
            "message": "resource not found",
            "error": 404
        }));
    }

    #[tokio::test]
    async fn test_wrong_method_uses_error_body() {
        let server = test_server(router(seeded_store()));

        let response = server.put("/categories").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.json::<Value>()["error"], 405);
    }

    #[tokio::test]
    async fn test_create_then_list_then_delete() {
        let store = seeded_store();
        with_questions(&store, 1, 9);
        let server = test_server(router(store.clone()));

        server
            .post("/questions")
            .json(&json!({
                "question": "Which metal is liquid at room temperature?",
                "answer": "Mercury",
                "difficulty": 2,
                "category": 1
            }))
            .await
            .assert_status_ok();

        let body: Value = server.get("/questions").await.json();
        assert_eq!(body["total_questions"], 10);
        assert_eq!(
            body["questions"][9]["question"],
            "Which metal is liquid at room temperature?"
        );

        let body: Value = server
            .post("/search")
            .json(&json!({"search": "room temperature"}))
            .await
            .json();
        assert_eq!(body["total_questions"], 1);
        let id = body["questions"][0]["id"].as_i64().unwrap();

        server
            .delete(&format!("/questions/{}", id))
            .await
            .assert_status_ok();
        assert_eq!(store.question_count(), 9);
    }
}
