use serde::{Deserialize, Serialize};
use signup_core::{Enrollment, Withdrawal};
use utoipa::{IntoParams, ToSchema};

/// Query string of the sign-up endpoint
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams, ToSchema)]
pub struct SignupQuery {
    /// Participant email, taken verbatim
    pub email: String,
}

/// Body of the unregister endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnregisterRequest {
    /// Participant email, taken verbatim
    pub email: String,
}

/// Confirmation returned by successful mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Enrollment> for MessageResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            message: enrollment.to_string(),
        }
    }
}

impl From<Withdrawal> for MessageResponse {
    fn from(withdrawal: Withdrawal) -> Self {
        Self {
            message: withdrawal.to_string(),
        }
    }
}

/// Error body for every rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
