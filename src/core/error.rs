use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Read-path storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Write validation or persistence failure
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Public message; details stay in the logs
    fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) => "internal server error",
            AppError::NotFound(_) => "resource not found",
            AppError::UnprocessableEntity(_) => "Unprocessable Entity",
            AppError::BadRequest(_) => "bad request",
            AppError::MethodNotAllowed => "method not allowed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::UnprocessableEntity(msg) => tracing::warn!("Unprocessable entity: {}", msg),
            other => tracing::debug!("{}", other),
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(status, self.public_message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = AppError::NotFound("question 9".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "resource not found");
    }

    #[tokio::test]
    async fn test_database_error_hides_cause() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "internal server error");
    }

    #[test]
    fn test_unprocessable_status() {
        let err = AppError::UnprocessableEntity("question text is required".to_string());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
