use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;

const ENTITY: &str = "Category";

/// Service for category operations. Each operation is a single store round
/// trip against the `categories` collection.
pub struct CategoryService {
    collection: Collection<Category>,
}

impl CategoryService {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("categories"),
        }
    }

    /// Create a new category and return it with its generated identifier
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let mut category = Category {
            id: None,
            name: dto.name,
        };

        let inserted = self.collection.insert_one(&category).await.map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::store("create", "category", e)
        })?;
        category.id = inserted.inserted_id.as_object_id();

        tracing::info!("Category created: name={:?}", category.name);
        Ok(category.into())
    }

    /// List every category in the store's natural retrieval order
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            tracing::error!("Failed to fetch categories: {:?}", e);
            AppError::store("fetch", "categories", e)
        })?;

        let categories: Vec<Category> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to fetch categories: {:?}", e);
            AppError::store("fetch", "categories", e)
        })?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Get a category by id. A malformed identifier cannot match any stored
    /// document, so it is reported as not found rather than as a fault.
    pub async fn get(&self, id: &str) -> Result<CategoryResponseDto> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let category = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch category {}: {:?}", id, e);
                AppError::store("fetch", "category", e)
            })?;

        category.map(Into::into).ok_or(AppError::NotFound(ENTITY))
    }

    /// Update a category and return the updated record
    pub async fn update(&self, id: &str, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let mut set = Document::new();
        if let Some(name) = dto.name {
            set.insert("name", name);
        }
        // The store rejects an empty update document; a body with no known
        // keys degrades to a plain read.
        if set.is_empty() {
            return self.get(id).await;
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update category {}: {:?}", id, e);
                AppError::store("update", "category", e)
            })?;

        updated.map(Into::into).ok_or(AppError::NotFound(ENTITY))
    }

    /// Delete a category. Referencing products are left untouched; the
    /// product-to-category relation carries no integrity guarantee.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::store("delete", "category", e)
            })?;

        if deleted.is_none() {
            return Err(AppError::NotFound(ENTITY));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}
