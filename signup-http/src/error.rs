//! Error handling for signup-http
//!
//! Maps registry rejections onto HTTP status codes and `{"detail": ...}` bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use signup_core::RegistryError;

use crate::models::ErrorResponse;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Registry rejection
    Registry(RegistryError),
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        let (error_status, _) = self.status_and_message();
        &error_status == status_code
    }
}

impl AppError {
    /// Get the status code and error message for this error
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Registry(err @ RegistryError::ActivityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Registry(
                err @ (RegistryError::AlreadyEnrolled { .. }
                | RegistryError::NotEnrolled { .. }
                | RegistryError::ActivityFull { .. }),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_message();
        tracing::debug!(status = status.as_u16(), "Request rejected: {}", detail);

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
