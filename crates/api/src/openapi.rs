//! OpenAPI documentation.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use crate::response::{UserEnvelope, UsersEnvelope};
use crate::state::AppState;
use domain::{User, UserPayload};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::replace_user,
        crate::handlers::user_handler::patch_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            UserPayload,
            UserEnvelope,
            UsersEnvelope,
        )
    ),
    tags(
        (name = "Users", description = "User resource endpoints"),
    )
)]
pub struct ApiDoc;

/// Route serving the generated document.
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
