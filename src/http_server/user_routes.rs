//! User HTTP Routes
//!
//! Endpoints for user CRUD. Each handler parses the inbound payload,
//! delegates to the store, and wraps the typed result in the response
//! envelope. Body and id parsing failures are produced here, before the
//! store is ever called.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::store::{User, UserInput, UserPatch, UserStore};

use super::errors::{ApiError, ApiResult};
use super::response::{ListResponse, MessageResponse, SingleResponse};

/// User routes state shared across handlers
pub struct UserState {
    pub store: UserStore,
}

impl UserState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

/// Create user routes
pub fn user_routes(state: Arc<UserState>) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        .with_state(state)
}

/// Parse the id path segment. A non-numeric id can never match a record,
/// so it maps to NotFound, the same outcome as an unknown numeric id.
fn parse_id(id: &str) -> ApiResult<u64> {
    id.parse::<u64>().map_err(|_| ApiError::NotFound)
}

/// Unwrap a JSON body extraction, mapping any rejection (syntax error,
/// wrong content type, type mismatch) to the generic malformed-input
/// failure.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload.map(|Json(body)| body).map_err(|_| ApiError::InvalidJson)
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<UserState>>) -> ApiResult<Json<ListResponse<User>>> {
    let users = state.store.list()?;
    Ok(Json(ListResponse::new(users)))
}

/// GET /users/:id - single user
async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleResponse<User>>> {
    let id = parse_id(&id)?;
    let user = state.store.get(id)?;
    Ok(Json(SingleResponse::new(user)))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<UserState>>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse<User>>)> {
    let input = parse_body(payload)?;
    let user = state.store.create(&input)?;
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(MessageResponse::created(user))))
}

/// PUT /users/:id - full update
async fn replace_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse<User>>> {
    let id = parse_id(&id)?;
    let input = parse_body(payload)?;
    let user = state.store.replace(id, &input)?;
    tracing::info!(id = user.id, "user replaced");
    Ok(Json(MessageResponse::updated(user)))
}

/// PATCH /users/:id - partial update
async fn patch_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<MessageResponse<User>>> {
    let id = parse_id(&id)?;
    let patch = parse_body(payload)?;
    let user = state.store.patch(id, &patch)?;
    tracing::info!(id = user.id, "user patched");
    Ok(Json(MessageResponse::updated(user)))
}

/// DELETE /users/:id - remove a user, returning a copy of the record
async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse<User>>> {
    let id = parse_id(&id)?;
    let user = state.store.delete(id)?;
    tracing::info!(id = user.id, "user deleted");
    Ok(Json(MessageResponse::deleted(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc").unwrap_err(), ApiError::NotFound));
        assert!(matches!(parse_id("-1").unwrap_err(), ApiError::NotFound));
    }

    #[test]
    fn test_routes_build() {
        let state = Arc::new(UserState::new(UserStore::seeded()));
        let _router = user_routes(state);
    }
}
