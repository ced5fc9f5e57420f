//! User CRUD handlers.
//!
//! The id path parameter is taken as a raw string and parsed per
//! endpoint: Get and Delete treat a non-integer id as a lookup that can
//! never match (404), while Update reports it as a validation failure
//! (400), mirroring the validator contract that requires an integer id
//! alongside the name.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Request body shared by Create and Update.
///
/// One schema serves both mutations; the id never travels in the body,
/// it is repository-assigned on create and a path parameter on update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// User display name
    #[validate(length(min = 3, max = 30, message = "name must be between 3 and 30 characters"))]
    #[schema(example = "Ana", min_length = 3, max_length = 30)]
    pub name: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Full list of users in insertion order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    // A non-integer id can never match a record
    let id: u32 = id.parse().map_err(|_| AppError::NotFound)?;

    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "Usuarios",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user's name
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<User>> {
    // The update contract validates the id as a required integer
    let id: u32 = id
        .parse()
        .map_err(|_| AppError::validation("id must be an integer"))?;

    let user = state.user_service.update_user(id, payload.name).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Removed user record", body = User),
        (status = 400, description = "Missing id parameter"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    if id.is_empty() {
        return Err(AppError::bad_request("id is required"));
    }

    let id: u32 = id.parse().map_err(|_| AppError::NotFound)?;

    let user = state.user_service.delete_user(id).await?;
    Ok(Json(user))
}
