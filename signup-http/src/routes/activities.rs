use crate::handlers::{get_activity, list_activities, signup_for_activity, unregister_from_activity};
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create the activity routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}", get(get_activity))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route(
            "/activities/{activity_name}/unregister",
            post(unregister_from_activity),
        )
}
