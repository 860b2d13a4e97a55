//! Route definitions for the events domain API

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{categories, events};
use super::EventsState;

fn event_routes() -> Router<EventsState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events", post(events::create_event))
        .route("/events/{id}", get(events::get_event))
        .route("/events/{id}", patch(events::update_event))
        .route("/events/{id}", delete(events::delete_event))
}

fn category_routes() -> Router<EventsState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories", post(categories::create_category))
        .route("/categories/{id}", get(categories::get_category))
        .route("/categories/{id}", patch(categories::update_category))
        .route("/categories/{id}", delete(categories::delete_category))
}

/// Create all events domain API routes
pub fn routes() -> Router<EventsState> {
    Router::new().merge(event_routes()).merge(category_routes())
}
