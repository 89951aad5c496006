use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto, UpdateProductDto};
use crate::features::products::models::Product;

const ENTITY: &str = "Product";

/// Service for product operations against the `products` collection
pub struct ProductService {
    collection: Collection<Product>,
}

impl ProductService {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("products"),
        }
    }

    /// Create a new product and return it with its generated identifier.
    /// Category references are stored as given; orphaned references are
    /// permitted.
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let category_id = parse_category_ids(&dto.category_id)?;

        let mut product = Product {
            id: None,
            name: dto.name,
            short_description: dto.short_description,
            description: dto.description,
            purchase_price: dto.purchase_price,
            selling_price: dto.selling_price,
            rating: dto.rating,
            images: dto.images,
            category_id,
        };

        let inserted = self.collection.insert_one(&product).await.map_err(|e| {
            tracing::error!("Failed to create product: {:?}", e);
            AppError::store("create", "product", e)
        })?;
        product.id = inserted.inserted_id.as_object_id();

        tracing::info!("Product created: name={:?}", product.name);
        Ok(product.into())
    }

    /// List every product in the store's natural retrieval order
    pub async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            tracing::error!("Failed to fetch products: {:?}", e);
            AppError::store("fetch", "products", e)
        })?;

        let products: Vec<Product> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to fetch products: {:?}", e);
            AppError::store("fetch", "products", e)
        })?;

        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Get a product by id; a malformed identifier is reported as not found
    pub async fn get(&self, id: &str) -> Result<ProductResponseDto> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let product = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch product {}: {:?}", id, e);
                AppError::store("fetch", "product", e)
            })?;

        product.map(Into::into).ok_or(AppError::NotFound(ENTITY))
    }

    /// Update a product and return the updated record. Only fields present in
    /// the request are written.
    pub async fn update(&self, id: &str, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let mut set = Document::new();
        if let Some(name) = dto.name {
            set.insert("name", name);
        }
        if let Some(short_description) = dto.short_description {
            set.insert("shortDescription", short_description);
        }
        if let Some(description) = dto.description {
            set.insert("description", description);
        }
        if let Some(purchase_price) = dto.purchase_price {
            set.insert("purchasePrice", purchase_price);
        }
        if let Some(selling_price) = dto.selling_price {
            set.insert("sellingPrice", selling_price);
        }
        if let Some(rating) = dto.rating {
            set.insert("rating", rating);
        }
        if let Some(images) = dto.images {
            set.insert("images", images);
        }
        if let Some(category_id) = dto.category_id {
            set.insert("categoryId", parse_category_ids(&category_id)?);
        }
        if set.is_empty() {
            return self.get(id).await;
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update product {}: {:?}", id, e);
                AppError::store("update", "product", e)
            })?;

        updated.map(Into::into).ok_or(AppError::NotFound(ENTITY))
    }

    /// Delete a product
    pub async fn delete(&self, id: &str) -> Result<()> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {}: {:?}", id, e);
                AppError::store("delete", "product", e)
            })?;

        if deleted.is_none() {
            return Err(AppError::NotFound(ENTITY));
        }

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }
}

/// Parse hex-encoded category references. Whether the referenced categories
/// exist is deliberately not checked.
fn parse_category_ids(raw: &[String]) -> Result<Vec<ObjectId>> {
    raw.iter()
        .map(|value| {
            ObjectId::parse_str(value)
                .map_err(|_| AppError::BadRequest(format!("Invalid category id: {}", value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_parse_or_reject() {
        let valid = vec![ObjectId::new().to_hex(), ObjectId::new().to_hex()];
        assert_eq!(parse_category_ids(&valid).unwrap().len(), 2);

        let invalid = vec!["not-an-id".to_string()];
        assert!(matches!(
            parse_category_ids(&invalid),
            Err(AppError::BadRequest(_))
        ));
    }
}
