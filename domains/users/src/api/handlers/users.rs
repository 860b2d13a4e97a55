//! User API handlers
//!
//! Implements account operations:
//! - POST /users - create an account
//! - GET /users/{id} - fetch a profile
//! - PUT /users/{id} - full-field replace
//! - DELETE /users/{id} - delete an account

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tertulia_common::{Error, Result};

use crate::api::UsersState;
use crate::domain::entities::{User, UserPayload};
use crate::repository::UserStore;

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::bad_request("user id must be an integer"))
}

/// POST /users - create a new user account
pub async fn create_user(
    State(state): State<UsersState>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse> {
    state.validator.validate_new_user(&payload).await?;

    let id = state.users.create(&payload).await?;

    tracing::info!(user_id = id, "user account created");

    Ok((StatusCode::CREATED, Json(json!({ "user_id": id }))))
}

/// GET /users/{id} - fetch a user profile
pub async fn get_user(
    State(state): State<UsersState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no user with id {id}")))?;

    Ok(Json(user))
}

/// PUT /users/{id} - full-field replace of a user profile
pub async fn update_user(
    State(state): State<UsersState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    // Validation also resolves the stored record; a miss surfaces as 404
    // before any write happens.
    state.validator.validate_updated_user(id, &payload).await?;

    state.users.update(id, &payload).await?;

    Ok(Json(User {
        id,
        username: payload.username,
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        profile_picture: payload.profile_picture,
        status_id: payload.status_id,
        role_id: payload.role_id,
    }))
}

/// DELETE /users/{id} - delete a user account
pub async fn delete_user(
    State(state): State<UsersState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no user with id {id}")))?;

    state.users.delete(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
