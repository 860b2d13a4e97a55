//! Locations domain: venues events can point at

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Location, LocationPayload};

// Re-export repository types
pub use repository::LocationRepository;

// Re-export API types
pub use api::routes;
pub use api::LocationsState;
