//! User JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
};

use common::{AppError, AppResult};
use domain::UserPayload;

/// JSON body decoded into a [`UserPayload`].
///
/// The content type is not checked; an unreadable, empty or malformed body is
/// a `400`.
pub struct UserBody(pub UserPayload);

#[async_trait]
impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        decode_user_body(Bytes::from_request(req, state).await).map(UserBody)
    }
}

/// Decode a body that was read by the handler itself.
///
/// Handlers that must look up the record first extract
/// `Result<Bytes, BytesRejection>` and call this afterwards, so a read failure
/// never hides a `404`.
pub fn decode_user_body(body: Result<Bytes, BytesRejection>) -> AppResult<UserPayload> {
    let body = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    UserPayload::from_json(&body).map_err(|e| AppError::bad_request(e.to_string()))
}
