use axum::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Success envelope: `{"success": true, ...payload fields}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload for endpoints that only report success
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Empty {}

/// Standard error body: `{"success": false, "message": ..., "error": <status>}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: status.as_u16(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page selector for question listings (fixed page size)
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1). Unparseable values fall back to 1.
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

fn lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or_else(default_page))
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

impl PaginationQuery {
    /// SQL OFFSET for the page; pages below 1 are treated as page 1.
    /// Saturates so huge pages land past the end instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit())
    }

    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> PaginationQuery {
        let uri: axum::http::Uri = format!("/questions?{}", query).parse().unwrap();
        axum::extract::Query::<PaginationQuery>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn test_page_defaults_to_first() {
        let query = parse("");
        assert_eq!(query.page, 1);
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn test_second_page_offset() {
        assert_eq!(parse("page=2").offset(), 10);
    }

    #[test]
    fn test_garbage_page_falls_back() {
        assert_eq!(parse("page=abc").page, 1);
    }

    #[test]
    fn test_non_positive_page_is_clamped() {
        assert_eq!(PaginationQuery { page: 0 }.offset(), 0);
        assert_eq!(PaginationQuery { page: -3 }.offset(), 0);
    }

    #[test]
    fn test_huge_page_offset_saturates() {
        let query = parse(&format!("page={}", i64::MAX));
        assert_eq!(query.page, i64::MAX);
        assert_eq!(query.offset(), i64::MAX);
    }

    #[test]
    fn test_success_envelope_flattens_payload() {
        #[derive(Serialize)]
        struct Payload {
            total_questions: i64,
        }

        let value = serde_json::to_value(ApiResponse::success(Payload { total_questions: 3 }))
            .unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "total_questions": 3}));
    }
}
