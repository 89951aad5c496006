use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::Message;

/// Create a new category
#[utoipa::path(
    post,
    path = "/category/add",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 500, description = "Store fault", body = Message)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    let category = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/category",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
        (status = 500, description = "Store fault", body = Message)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/category/{id}",
    params(
        ("id" = String, Path, description = "Category identifier")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = Message)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get(&id).await?;
    Ok(Json(category))
}

/// Update a category by id
#[utoipa::path(
    put,
    path = "/category/{id}",
    params(
        ("id" = String, Path, description = "Category identifier")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = Message)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.update(&id, dto).await?;
    Ok(Json(category))
}

/// Delete a category by id
#[utoipa::path(
    delete,
    path = "/category/delete/{id}",
    params(
        ("id" = String, Path, description = "Category identifier")
    ),
    responses(
        (status = 200, description = "Category deleted", body = Message),
        (status = 404, description = "Category not found", body = Message)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    service.delete(&id).await?;
    Ok(Json(Message::new("Category deleted successfully")))
}
