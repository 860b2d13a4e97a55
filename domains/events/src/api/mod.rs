//! HTTP surface for the events domain

pub mod handlers;
pub mod routes;

use crate::repository::EventsRepositories;

pub use routes::routes;

/// Application state for the events domain
#[derive(Clone)]
pub struct EventsState {
    pub repos: EventsRepositories,
}
