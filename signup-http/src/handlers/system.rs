use axum::{http::StatusCode, response::Redirect};

/// Landing page served by the static file service
pub const LANDING_PAGE: &str = "/static/index.html";

/// Redirect the root to the landing page (307)
pub async fn root_redirect() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

/// Health check endpoint for container health monitoring
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
