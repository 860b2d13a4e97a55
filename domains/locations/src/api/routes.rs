//! Route definitions for the locations domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::locations;
use super::LocationsState;

/// Create all locations domain API routes
pub fn routes() -> Router<LocationsState> {
    Router::new()
        .route("/locations", get(locations::list_locations))
        .route("/locations", post(locations::create_location))
        .route("/locations/{id}", get(locations::get_location))
        .route("/locations/{id}", delete(locations::delete_location))
}
