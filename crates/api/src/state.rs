//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::infra::Database;
use user_service_lib::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state with an injected user service.
    pub fn new(users: Arc<dyn UserService>, database: Database) -> Self {
        Self { users, database }
    }

    /// Create app state backed by the store behind `database`.
    pub fn from_database(database: Database) -> Self {
        let users = user_service_lib::user_service(&database);
        Self::new(users, database)
    }
}
