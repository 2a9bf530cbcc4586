//! User handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use crate::api::extractors::{UserIdPath, ValidatedJson};
use crate::api::AppState;
use crate::config::USERS_PATH;
use crate::domain::User;
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// Create a new user
///
/// Responds with no body; the assigned id is exposed through `Location`.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 204, description = "User created",
            headers(("location" = String, description = "Path of the new user"))),
        (status = 400, description = "Invalid JSON or missing name", body = String)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> AppResult<impl IntoResponse> {
    let id = state.user_service.create_user(user).await?;

    Ok((
        StatusCode::NO_CONTENT,
        [(header::LOCATION, format!("{}/{}", USERS_PATH, id))],
    ))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Id is not an integer", body = String),
        (status = 404, description = "User not found", body = String)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not an integer", body = String),
        (status = 404, description = "User not found", body = String)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
