//! Application route configuration.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{STATIC_DIR, USERS_BASE_PATH};

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured.
///
/// Request logging is attached only in development mode.
pub fn create_router(state: AppState) -> Router {
    let development = state.config.is_development();

    let router = Router::new()
        // Health check endpoint
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User CRUD routes
        .nest(USERS_BASE_PATH, user_routes())
        // Static assets, served for any path no route claims
        .fallback_service(ServeDir::new(STATIC_DIR))
        .with_state(state);

    if development {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    app: String,
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        app: state.config.app_name.clone(),
    })
}
