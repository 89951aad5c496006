use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    /// Accepted verbatim; an empty or missing name is persisted as-is.
    #[serde(default)]
    pub name: String,
}

/// Request DTO for updating a category. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    pub name: Option<String>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    /// Store-generated identifier, hex-encoded
    pub id: String,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: category.name,
        }
    }
}
