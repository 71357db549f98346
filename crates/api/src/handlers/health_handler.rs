//! Liveness of the user store.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// `200` while the store answers a ping, `503` otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.database.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "healthy" })),
        Err(e) => {
            warn!(error = %e, "User store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "unavailable",
                }),
            )
        }
    }
}
