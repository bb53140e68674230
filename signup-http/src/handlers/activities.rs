use crate::error::AppError;
use crate::models::{ErrorResponse, MessageResponse, SignupQuery, UnregisterRequest};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use signup_core::{Activities, Activity};

/// List activities
///
/// Returns every activity keyed by name, in catalogue order.
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activities listed successfully", body = std::collections::HashMap<String, Activity>)
    )
)]
#[axum::debug_handler]
pub async fn list_activities(State(state): State<AppState>) -> Json<Activities> {
    Json(state.registry.list())
}

/// Get activity
#[utoipa::path(
    get,
    path = "/activities/{activity_name}",
    responses(
        (status = 200, description = "Activity retrieved successfully", body = Activity),
        (status = 404, description = "Activity not found", body = ErrorResponse)
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name, exact and case-sensitive")
    )
)]
#[axum::debug_handler]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, AppError> {
    Ok(Json(state.registry.get(&activity_name)?))
}

/// Sign up for an activity
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    responses(
        (status = 200, description = "Participant signed up", body = MessageResponse),
        (status = 400, description = "Participant already signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse)
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name, exact and case-sensitive"),
        SignupQuery
    )
)]
#[axum::debug_handler]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let enrollment = state.registry.enroll(&activity_name, &query.email)?;
    Ok(Json(enrollment.into()))
}

/// Unregister from an activity
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/unregister",
    request_body = UnregisterRequest,
    responses(
        (status = 200, description = "Participant unregistered", body = MessageResponse),
        (status = 400, description = "Participant not registered", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse)
    ),
    params(
        ("activity_name" = String, Path, description = "Activity name, exact and case-sensitive")
    )
)]
#[axum::debug_handler]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Json(request): Json<UnregisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let withdrawal = state.registry.withdraw(&activity_name, &request.email)?;
    Ok(Json(withdrawal.into()))
}
