use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Get the next quiz question
///
/// Picks a random question from the category that is not in `previous_q`.
/// The response has no `question` once all of them have been served.
#[utoipa::path(
    post,
    path = "/quiz",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or none when the quiz is over", body = ApiResponse<QuizResponseDto>),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "quiz"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(request): AppJson<QuizRequestDto>,
) -> Result<Json<ApiResponse<QuizResponseDto>>> {
    let next = service.next_question(&request).await?;
    Ok(Json(ApiResponse::success(next)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::features::quizzes::{routes, QuizService};
    use crate::shared::test_helpers::{seeded_store, test_server, with_questions};

    #[tokio::test]
    async fn test_play_quiz_until_exhausted() {
        let store = seeded_store();
        with_questions(&store, 5, 3);
        let server = test_server(routes::routes(Arc::new(QuizService::new(store))));

        let mut previous: Vec<i64> = Vec::new();
        for _ in 0..3 {
            let body: Value = server
                .post("/quiz")
                .json(&json!({
                    "previous_q": previous,
                    "quiz_category": {"id": 5, "type": "Entertainment"}
                }))
                .await
                .json();

            assert_eq!(body["success"], true);
            let id = body["question"]["id"].as_i64().unwrap();
            assert!(!previous.contains(&id));
            previous.push(id);
        }

        let response = server
            .post("/quiz")
            .json(&json!({
                "previous_q": previous,
                "quiz_category": {"id": 5, "type": "Entertainment"}
            }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"success": true}));
    }

    #[tokio::test]
    async fn test_play_quiz_without_category_is_422() {
        let server = test_server(routes::routes(Arc::new(QuizService::new(seeded_store()))));

        let response = server.post("/quiz").json(&json!({"previous_q": []})).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unprocessable Entity");
    }
}
