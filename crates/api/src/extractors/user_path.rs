//! User id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;
use domain::UserId;

/// The `{id}` path segment, parsed as a [`UserId`].
///
/// Anything that is not a well-formed id is answered with `404` before any
/// handler logic runs.
pub struct UserPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        let id = raw.parse::<UserId>()?;
        Ok(UserPath(id))
    }
}
