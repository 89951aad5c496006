use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto, UpdateProductDto};
use crate::features::products::services::ProductService;
use crate::shared::types::Message;

/// Create a new product
#[utoipa::path(
    post,
    path = "/products/add",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponseDto),
        (status = 500, description = "Store fault", body = Message)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    let product = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
        (status = 500, description = "Store fault", body = Message)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = Message)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get(&id).await?;
    Ok(Json(product))
}

/// Update a product by id
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = Message)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.update(&id, dto).await?;
    Ok(Json(product))
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product deleted", body = Message),
        (status = 404, description = "Product not found", body = Message)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    service.delete(&id).await?;
    Ok(Json(Message::new("Product deleted successfully")))
}
