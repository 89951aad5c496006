use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;

const ENTITY: &str = "User";

/// Service for user operations against the `users` collection.
///
/// Every read path maps through [`UserResponseDto`], which carries no
/// password field, so the stored credential is never serialized into a
/// response.
pub struct UserService {
    collection: Collection<User>,
}

impl UserService {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("users"),
        }
    }

    /// Create a new user. `isAdmin` defaults to false when omitted.
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let mut user = User {
            id: None,
            name: dto.name,
            email: dto.email,
            password: dto.password,
            is_admin: dto.is_admin.unwrap_or(false),
        };

        let inserted = self.collection.insert_one(&user).await.map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::store("create", "user", e)
        })?;
        user.id = inserted.inserted_id.as_object_id();

        tracing::info!("User created: email={:?}", user.email);
        Ok(user.into())
    }

    /// List every user, passwords excluded
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            tracing::error!("Failed to fetch users: {:?}", e);
            AppError::store("fetch", "users", e)
        })?;

        let users: Vec<User> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to fetch users: {:?}", e);
            AppError::store("fetch", "users", e)
        })?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Get a user by id, password excluded; a malformed identifier is
    /// reported as not found
    pub async fn get(&self, id: &str) -> Result<UserResponseDto> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let user = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch user {}: {:?}", id, e);
                AppError::store("fetch", "user", e)
            })?;

        user.map(Into::into).ok_or(AppError::NotFound(ENTITY))
    }

    /// Update a user and return the updated record, password excluded. A
    /// password present in the request is written verbatim; an omitted one
    /// leaves the stored value untouched.
    pub async fn update(&self, id: &str, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let mut set = Document::new();
        if let Some(name) = dto.name {
            set.insert("name", name);
        }
        if let Some(email) = dto.email {
            set.insert("email", email);
        }
        if let Some(password) = dto.password {
            set.insert("password", password);
        }
        if let Some(is_admin) = dto.is_admin {
            set.insert("isAdmin", is_admin);
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
                tracing::error!("Failed to update user {}: {:?}", id, e);
                AppError::store("update", "user", e)
            })?;

        updated.map(Into::into).ok_or(AppError::NotFound(ENTITY))
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<()> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Err(AppError::NotFound(ENTITY));
        };

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete user {}: {:?}", id, e);
                AppError::store("delete", "user", e)
            })?;

        if deleted.is_none() {
            return Err(AppError::NotFound(ENTITY));
        }

        tracing::info!("User deleted: id={}", id);
        Ok(())
    }
}
