use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::products::models::Product;

/// Request DTO for creating a product. Every field is optional; missing
/// fields fall back to empty/zero values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Referenced category identifiers, hex-encoded. Stored as given; no
    /// existence check is performed against the categories collection.
    #[serde(default)]
    pub category_id: Vec<String>,
}

/// Request DTO for updating a product. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub purchase_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub rating: Option<f64>,
    pub images: Option<Vec<String>>,
    pub category_id: Option<Vec<String>>,
}

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    /// Store-generated identifier, hex-encoded
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub rating: f64,
    pub images: Vec<String>,
    pub category_id: Vec<String>,
}

impl From<Product> for ProductResponseDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            short_description: product.short_description,
            description: product.description,
            purchase_price: product.purchase_price,
            selling_price: product.selling_price,
            rating: product.rating,
            images: product.images,
            category_id: product.category_id.iter().map(|id| id.to_hex()).collect(),
        }
    }
}
