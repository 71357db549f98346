//! User repository implementation over the embedded store.

use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Records are keyed by id; there is exactly one row per id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// List all users (order unspecified)
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert the record, or overwrite every field of the existing one
    async fn upsert(&self, record: &User) -> AppResult<()>;

    /// Permanently delete user by ID
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn upsert(&self, record: &User) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(record.id.as_uuid()),
            name: Set(record.name.clone()),
            role: Set(record.role.clone()),
        };

        UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([user::Column::Name, user::Column::Role])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
