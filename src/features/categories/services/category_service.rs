use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoriesResponseDto, CategoryLookup};
use crate::features::categories::models::Category;
use crate::modules::storage::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// All categories as an id -> label map; an empty table is a 404
    pub async fn list(&self) -> Result<CategoriesResponseDto> {
        let categories = self.fetch_all().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound("no categories".to_string()));
        }

        Ok(categories.into_iter().collect())
    }

    /// Id -> label map, possibly empty
    pub async fn lookup(&self) -> Result<CategoryLookup> {
        let categories = self.fetch_all().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.label)).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Category> {
        self.store
            .find_category(id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        match self.get(id).await {
            Ok(_) => Ok(true),
            Err(AppError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Category>> {
        self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }
}
