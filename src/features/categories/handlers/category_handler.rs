use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoriesResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories
///
/// Returns a map of category id to display label.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category map", body = ApiResponse<CategoriesResponseDto>),
        (status = 404, description = "No categories", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoriesResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}
