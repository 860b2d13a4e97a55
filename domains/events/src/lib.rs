//! Events domain: events and the categories they belong to

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Category, Event};
pub use domain::filter::{CategoryFilterParams, EventFilterParams};

// Re-export repository types
pub use repository::{CategoryRepository, EventRepository, EventsRepositories};

// Re-export API types
pub use api::routes;
pub use api::EventsState;
