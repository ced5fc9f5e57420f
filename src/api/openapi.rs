//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::User;

/// OpenAPI documentation for the Usuarios API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuarios API",
        version = "0.1.0",
        description = "In-memory user directory exposing CRUD operations over REST",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            user_handler::UserPayload,
        )
    ),
    tags(
        (name = "Usuarios", description = "User directory CRUD operations")
    )
)]
pub struct ApiDoc;
