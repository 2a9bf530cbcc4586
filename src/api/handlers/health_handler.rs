//! Root and health handlers.

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::ROOT_GREETING;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving
    #[schema(example = "healthy")]
    pub status: String,
    /// Number of stored users
    #[schema(example = 3)]
    pub users: usize,
}

/// Root endpoint, answers every method
pub async fn root() -> &'static str {
    ROOT_GREETING
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        users: state.user_service.count_users(),
    })
}
