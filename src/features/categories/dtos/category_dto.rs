use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category id to display label, serialized as a JSON object
pub type CategoryLookup = BTreeMap<i32, String>;

/// Response DTO for the category listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryLookup,
}

impl FromIterator<Category> for CategoriesResponseDto {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().map(|c| (c.id, c.label)).collect(),
        }
    }
}
