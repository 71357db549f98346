//! Route configuration.

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_routes, user_routes};
use crate::openapi::openapi_routes;
use crate::state::AppState;

/// The service handed to the server: the router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .merge(health_routes())
        // OpenAPI document
        .merge(openapi_routes())
        // User resource
        .merge(user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the full application, `/users/` and `/users` routing alike.
///
/// Path normalisation has to wrap the router: a layer added with
/// `Router::layer` runs after routing.
pub fn create_app(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}
