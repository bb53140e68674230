use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use signup_core::{Activity, ActivityRegistry, RegistryConfig};
use signup_http::{
    handlers::activities::{
        get_activity, list_activities, signup_for_activity, unregister_from_activity,
    },
    models::{SignupQuery, UnregisterRequest},
    server::AppState,
};

fn create_test_state() -> AppState {
    let registry = ActivityRegistry::new(
        RegistryConfig::empty().with_activity("Chess Club", Activity::new("Chess", "Fridays")),
    )
    .unwrap();
    AppState::new(registry)
}

#[tokio::test]
async fn test_list_activities_handler() {
    let state = create_test_state();

    let response = list_activities(State(state)).await;

    let body = serde_json::to_value(&response.0).unwrap();
    assert_eq!(body["Chess Club"]["schedule"], "Fridays");
    assert!(body["Chess Club"]["participants"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_signup_handler() {
    let state = create_test_state();

    let response = signup_for_activity(
        State(state.clone()),
        Path("Chess Club".to_string()),
        Query(SignupQuery {
            email: "a@x.com".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(response.0.message, "a@x.com signed up for Chess Club");

    let err = signup_for_activity(
        State(state.clone()),
        Path("Chess Club".to_string()),
        Query(SignupQuery {
            email: "a@x.com".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(err == StatusCode::BAD_REQUEST);

    let err = signup_for_activity(
        State(state),
        Path("Nope".to_string()),
        Query(SignupQuery {
            email: "a@x.com".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(err == StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unregister_handler() {
    let state = create_test_state();
    state.registry.enroll("Chess Club", "a@x.com").unwrap();

    let response = unregister_from_activity(
        State(state.clone()),
        Path("Chess Club".to_string()),
        Json(UnregisterRequest {
            email: "a@x.com".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(response.0.message, "a@x.com unregistered from Chess Club");

    let err = unregister_from_activity(
        State(state),
        Path("Chess Club".to_string()),
        Json(UnregisterRequest {
            email: "a@x.com".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(err == StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_activity_handler() {
    let state = create_test_state();

    let response = get_activity(State(state.clone()), Path("Chess Club".to_string()))
        .await
        .unwrap();
    assert_eq!(response.0.description, "Chess");

    let err = get_activity(State(state), Path("chess club".to_string()))
        .await
        .unwrap_err();
    assert!(err == StatusCode::NOT_FOUND);
}
