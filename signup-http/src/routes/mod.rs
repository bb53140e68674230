pub mod activities;
pub mod swagger;

use crate::handlers::{health_check, root_redirect};
use crate::server::AppState;
use axum::{Router, routing::get};
use swagger::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .merge(activities::routes())
}
