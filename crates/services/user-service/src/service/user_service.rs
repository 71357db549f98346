//! User service - the entity module the HTTP handlers talk to.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{IdGenerator, RandomIds, User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Hand out a fresh identifier for a new record
    fn new_id(&self) -> UserId;

    /// Validate, then insert or fully overwrite the record
    async fn save(&self, user: &User) -> AppResult<()>;

    /// Get user by ID
    async fn one(&self, id: UserId) -> AppResult<User>;

    /// List every user
    async fn all(&self) -> AppResult<Vec<User>>;

    /// Delete user by ID
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl UserManager {
    /// Create new user service instance with repository and random ids
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_ids(repo, Arc::new(RandomIds))
    }

    /// Create new user service instance with a custom id source
    pub fn with_ids(repo: Arc<dyn UserRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repo, ids }
    }
}

#[async_trait]
impl UserService for UserManager {
    fn new_id(&self) -> UserId {
        self.ids.next_id()
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        user.ensure_valid()?;
        self.repo.upsert(user).await
    }

    async fn one(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn all(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
