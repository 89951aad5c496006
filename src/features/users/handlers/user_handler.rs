use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::Message;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/add",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponseDto),
        (status = 500, description = "Store fault", body = Message)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponseDto>)> {
    let user = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users (passwords excluded)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponseDto>),
        (status = 500, description = "Store fault", body = Message)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<Vec<UserResponseDto>>> {
    let users = service.list().await?;
    Ok(Json(users))
}

/// Get a user by id (password excluded)
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 404, description = "User not found", body = Message)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponseDto>> {
    let user = service.get(&id).await?;
    Ok(Json(user))
}

/// Update a user by id (password excluded from the response)
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponseDto),
        (status = 404, description = "User not found", body = Message)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<UserResponseDto>> {
    let user = service.update(&id, dto).await?;
    Ok(Json(user))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User deleted", body = Message),
        (status = 404, description = "User not found", body = Message)
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    service.delete(&id).await?;
    Ok(Json(Message::new("User deleted successfully")))
}
