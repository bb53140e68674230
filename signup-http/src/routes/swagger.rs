use crate::handlers::{activities, system};
use crate::models::{ErrorResponse, MessageResponse, SignupQuery, UnregisterRequest};
use signup_core::Activity;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Activity Sign-up API", description = "Extracurricular activity sign-ups"),
    paths(
        activities::list_activities,
        activities::get_activity,
        activities::signup_for_activity,
        activities::unregister_from_activity,
        system::health_check
    ),
    components(schemas(
        Activity,
        SignupQuery,
        UnregisterRequest,
        MessageResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;
