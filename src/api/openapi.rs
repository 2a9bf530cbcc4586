//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::User;

/// OpenAPI documentation for the User Store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Store API",
        version = "0.1.0",
        description = "In-memory user records behind a readers-writer lock",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:9090", description = "Local development server")
    ),
    paths(
        health_handler::health,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::delete_user,
    ),
    components(
        schemas(User, health_handler::HealthResponse)
    ),
    tags(
        (name = "Users", description = "Create, fetch and delete users"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;
