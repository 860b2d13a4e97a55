//! HTTP surface for the locations domain

pub mod handlers;
pub mod routes;

use crate::repository::LocationRepository;

pub use routes::routes;

/// Application state for the locations domain
#[derive(Clone)]
pub struct LocationsState {
    pub locations: LocationRepository,
}
