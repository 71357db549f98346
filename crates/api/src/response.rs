//! Response helpers: JSON envelopes, `201 Created`, and `Allow` answers.

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use axum_extra::{headers::Allow, TypedHeader};
use serde::Serialize;
use utoipa::ToSchema;

use domain::User;

/// Methods served on the collection path
pub fn collection_methods() -> [Method; 4] {
    [Method::GET, Method::POST, Method::HEAD, Method::OPTIONS]
}

/// Methods served on a resource path
pub fn item_methods() -> [Method; 6] {
    [
        Method::GET,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::HEAD,
        Method::OPTIONS,
    ]
}

/// Single user envelope: `{"user": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

/// User list envelope: `{"users": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}

/// `200 OK` with a JSON body, or with no body at all for `HEAD`.
pub fn ok_unless_head<T: Serialize>(method: &Method, body: T) -> Response {
    if *method == Method::HEAD {
        return StatusCode::OK.into_response();
    }
    (StatusCode::OK, Json(body)).into_response()
}

/// `201 Created` pointing at the new resource, empty body.
pub struct Created {
    location: String,
}

impl Created {
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, [(header::LOCATION, self.location)]).into_response()
    }
}

/// Status plus an `Allow` header listing the served methods, empty body.
pub struct Allowed {
    status: StatusCode,
    allow: Allow,
}

impl Allowed {
    /// Answer to `OPTIONS`
    pub fn options(methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            status: StatusCode::OK,
            allow: methods.into_iter().collect(),
        }
    }

    /// Answer to a method the path does not serve
    pub fn not_allowed(methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            allow: methods.into_iter().collect(),
        }
    }
}

impl IntoResponse for Allowed {
    fn into_response(self) -> Response {
        (self.status, TypedHeader(self.allow)).into_response()
    }
}
