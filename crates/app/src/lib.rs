//! Tertulia application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tertulia_events::{EventsRepositories, EventsState};
use tertulia_locations::{LocationRepository, LocationsState};
use tertulia_users::{UserRepository, UserValidator, UsersState};

/// Create the main application router with all routes
pub fn create_app(pool: PgPool) -> Router {
    let events_state = EventsState {
        repos: EventsRepositories::new(pool.clone()),
    };

    // The validator is built once and shares the repository as its store;
    // request-scoped data always arrives as arguments.
    let users_repo = UserRepository::new(pool.clone());
    let users_state = UsersState {
        validator: UserValidator::new(Arc::new(users_repo.clone())),
        users: users_repo,
    };

    let locations_state = LocationsState {
        locations: LocationRepository::new(pool),
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(tertulia_events::routes().with_state(events_state))
        .merge(tertulia_users::routes().with_state(users_state))
        .merge(tertulia_locations::routes().with_state(locations_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
