//! User CRUD endpoints
//!
//! This module provides the user resource endpoints:
//!
//! - `POST /users` - Create a user
//! - `GET /users/:id` - Fetch one user
//! - `PUT /users/:id` - Update one user in place
//! - `DELETE /users/:id` - Delete one user
//! - `GET /users` - List users

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ErrorResponse},
    models::user::{CreateUser, UpdateUser, User},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// User payload for create and update requests
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Pagination query parameters for listing users
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    /// Maximum number of users to return (default: 100)
    pub limit: Option<i64>,

    /// Number of users to skip (default: 0)
    pub offset: Option<i64>,
}

/// List response wrapping the returned page and the total count
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// Total number of users in the database
    pub total: i64,

    /// Users in this page, newest first
    pub users: Vec<User>,
}

/// Delete response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    /// ID of the deleted user
    pub id: i32,

    /// Always true; absent users return 404 instead
    pub deleted: bool,
}

/// Create a new user
///
/// # Errors
///
/// - `409 Conflict`: Email already registered
/// - `422 Unprocessable Entity`: Validation failed
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<(StatusCode, Json<User>)> {
    payload.validate()?;

    // Reject duplicate emails before hitting the unique constraint
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let user = User::create(
        &state.db,
        CreateUser {
            name: payload.name,
            email: payload.email,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Retrieve a user by ID
///
/// # Errors
///
/// - `404 Not Found`: No user with this ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Update a user by ID
///
/// Replaces the user's name and email in place.
///
/// # Errors
///
/// - `404 Not Found`: No user with this ID
/// - `409 Conflict`: Email already registered to another user
/// - `422 Unprocessable Entity`: Validation failed
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<Json<User>> {
    payload.validate()?;

    let user = User::update(
        &state.db,
        id,
        UpdateUser {
            name: payload.name,
            email: payload.email,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = user.id, "Updated user");
    Ok(Json(user))
}

/// Delete a user by ID
///
/// # Errors
///
/// - `404 Not Found`: No user with this ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeleteUserResponse>> {
    let deleted = User::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    tracing::info!(user_id = id, "Deleted user");
    Ok(Json(DeleteUserResponse { id, deleted: true }))
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Users in the requested page", body = UserListResponse),
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Json<UserListResponse>> {
    let limit = params.limit.unwrap_or(100);
    let offset = params.offset.unwrap_or(0);

    let users = User::list(&state.db, limit, offset).await?;
    let total = User::count(&state.db).await?;

    Ok(Json(UserListResponse { total, users }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let payload = UserPayload {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let payload = UserPayload {
            name: String::new(),
            email: "test@example.com".to_string(),
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let payload = UserPayload {
            name: "Test User".to_string(),
            email: "not-an-email".to_string(),
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
