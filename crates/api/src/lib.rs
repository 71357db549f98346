//! Users API Library
//!
//! This crate provides the HTTP REST API over the user store.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::{extract::Request, ServiceExt};
use tracing::info;

use user_service_lib::infra::Database;

use crate::config::ApiConfig;
use crate::routes::create_app;
use crate::state::AppState;

/// Open the store and run the HTTP server until it fails.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Database::connect(&config.database).await?;

    // Create app state
    let state = AppState::from_database(database);

    // Build application
    let app = create_app(state);

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Users API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
