//! User Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateUserRequest, ListUsersParams, UpdateUserRequest};
use crate::application::dto::response::{DeleteUserResponse, UserListResponse, UserResponse};
use crate::application::services::{
    CreateUserDto, ListUsersDto, UpdateUserDto, UserError, UserService, UserServiceImpl,
};
use crate::infrastructure::repositories::PgUserRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Map service errors to transport-level errors
fn map_user_error(e: UserError) -> AppError {
    match e {
        UserError::NotFound => AppError::NotFound("User not found".into()),
        UserError::DuplicateEmail => AppError::Conflict("Email already in use".into()),
        UserError::InvalidInput(msg) => AppError::BadRequest(msg),
        UserError::Store(e) => e,
    }
}

fn user_service(state: &AppState) -> UserServiceImpl<PgUserRepository> {
    let user_repo = Arc::new(PgUserRepository::new(state.db.clone()));
    UserServiceImpl::new(user_repo)
}

fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let user = user_service(&state)
        .create_user(CreateUserDto {
            name: body.name,
            email: body.email,
            age: body.age,
        })
        .await
        .map_err(map_user_error)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let user = user_service(&state)
        .get_user(user_id)
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(user)))
}

/// List users with pagination and optional search
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<UserListResponse>, AppError> {
    let page = user_service(&state)
        .list_users(ListUsersDto {
            page: params.page,
            limit: params.limit,
            search: params.search,
        })
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserListResponse::from(page)))
}

/// Apply a partial update to a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    body.validate().map_err(validation_error)?;

    let user = user_service(&state)
        .update_user(
            user_id,
            UpdateUserDto {
                name: body.name,
                email: body.email,
                age: body.age,
            },
        )
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    user_service(&state)
        .delete_user(user_id)
        .await
        .map_err(map_user_error)?;

    Ok(Json(DeleteUserResponse {
        message: "User deleted".to_string(),
    }))
}
