//! User Service Library
//!
//! This crate owns the user store: the SQLite-backed repository, the table
//! it lives in, and the service the HTTP layer calls into.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Build the user service on top of an open database.
pub fn user_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Arc::new(UserManager::new(user_repo))
}
