//! User handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{Json, Response},
    routing::get,
    Router,
};
use tracing::info;

use common::AppResult;
use domain::{user_path, USERS_PATH};

use crate::extractors::{decode_user_body, UserBody, UserPath};
use crate::response::{
    collection_methods, item_methods, ok_unless_head, Allowed, Created, UserEnvelope,
    UsersEnvelope,
};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            USERS_PATH,
            get(list_users)
                .post(create_user)
                .options(collection_options)
                .fallback(collection_method_not_allowed),
        )
        .route(
            &format!("{}/:id", USERS_PATH),
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user)
                .options(item_options)
                .fallback(item_method_not_allowed),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = UsersEnvelope),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_users(method: Method, State(state): State<AppState>) -> AppResult<Response> {
    let users = state.users.all().await?;
    Ok(ok_unless_head(&method, UsersEnvelope { users }))
}

/// Create a user with a server-assigned id
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = domain::UserPayload,
    responses(
        (status = 201, description = "User created",
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Malformed body or invalid user"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    UserBody(payload): UserBody,
) -> AppResult<Created> {
    let user = payload.into_user(state.users.new_id());
    state.users.save(&user).await?;

    info!(user_id = %user.id, "User created");
    Ok(Created::at(user_path(user.id)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (32 hex digits)")
    ),
    responses(
        (status = 200, description = "User", body = UserEnvelope),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_user(
    method: Method,
    State(state): State<AppState>,
    UserPath(id): UserPath,
) -> AppResult<Response> {
    let user = state.users.one(id).await?;
    Ok(ok_unless_head(&method, UserEnvelope { user }))
}

/// Replace user (fields missing from the body are reset)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (32 hex digits)")
    ),
    request_body = domain::UserPayload,
    responses(
        (status = 200, description = "User replaced", body = UserEnvelope),
        (status = 400, description = "Malformed body or invalid user"),
        (status = 404, description = "Malformed user ID"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn replace_user(
    State(state): State<AppState>,
    UserPath(id): UserPath,
    UserBody(payload): UserBody,
) -> AppResult<Json<UserEnvelope>> {
    let user = payload.into_user(id);
    state.users.save(&user).await?;

    Ok(Json(UserEnvelope { user }))
}

/// Partially update user (fields missing from the body are kept)
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (32 hex digits)")
    ),
    request_body = domain::UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Malformed body or invalid user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    UserPath(id): UserPath,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<UserEnvelope>> {
    // Lookup comes first so an unknown id is a 404 whatever the body holds
    let mut user = state.users.one(id).await?;

    decode_user_body(body)?.apply_to(&mut user);
    state.users.save(&user).await?;

    Ok(Json(UserEnvelope { user }))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (32 hex digits)")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserPath(id): UserPath,
) -> AppResult<StatusCode> {
    state.users.delete(id).await?;

    info!(user_id = %id, "User deleted");
    Ok(StatusCode::OK)
}

/// `OPTIONS /users`
pub async fn collection_options() -> Allowed {
    Allowed::options(collection_methods())
}

/// `OPTIONS /users/{id}`
pub async fn item_options(UserPath(_id): UserPath) -> Allowed {
    Allowed::options(item_methods())
}

pub async fn collection_method_not_allowed() -> Allowed {
    Allowed::not_allowed(collection_methods())
}

/// Malformed ids still win over the method check.
pub async fn item_method_not_allowed(UserPath(_id): UserPath) -> Allowed {
    Allowed::not_allowed(item_methods())
}
