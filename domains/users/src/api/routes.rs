//! Route definitions for the users domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::users;
use super::UsersState;

/// Create all users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}", put(users::update_user))
        .route("/users/{id}", delete(users::delete_user))
}
