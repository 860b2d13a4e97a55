//! Event API handlers
//!
//! Implements event CRUD:
//! - GET /events - list events, optionally filtered
//! - GET /events/{id} - get a single event
//! - POST /events - create an event
//! - PATCH /events/{id} - partial update
//! - DELETE /events/{id} - delete an event

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tertulia_common::{Error, Result};

use crate::api::EventsState;
use crate::domain::entities::Event;
use crate::domain::filter::EventFilterParams;
use crate::domain::validation;

/// Request for creating an event
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub category_id: i64,
}

/// Request for partially updating an event. Only fields present in the body
/// are overwritten; an empty string clears an optional field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<i64>,
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::bad_request("id should be an integer"))
}

/// GET /events - list events, filtered by any recognized query parameters
pub async fn list_events(
    State(state): State<EventsState>,
    Query(params): Query<EventFilterParams>,
) -> Result<Json<Vec<Event>>> {
    let filter = params.to_filter();
    let events = state.repos.events.list(&filter).await?;
    Ok(Json(events))
}

/// GET /events/{id} - get a single event by its id
pub async fn get_event(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<Json<Event>> {
    let id = parse_id(&id)?;
    let event = state
        .repos
        .events
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no event with id {id}")))?;

    Ok(Json(event))
}

/// POST /events - create a new event
pub async fn create_event(
    State(state): State<EventsState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse> {
    // Structural pass first; no persistence is touched until it succeeds.
    validation::validate_new_event(
        &request.name,
        request.description.as_deref(),
        request.location.as_deref(),
        request.category_id,
    )?;

    // Cascading fetch: a missing category is an identity miss, not a field
    // error (the id was well-formed, the record is gone).
    let category = state
        .repos
        .categories
        .find(request.category_id)
        .await?
        .ok_or_else(|| {
            Error::not_found(anyhow::anyhow!("no category with id {}", request.category_id))
        })?;

    let id = state
        .repos
        .events
        .create(
            &request.name,
            request.description.as_deref(),
            request.location.as_deref(),
            category.id,
        )
        .await?;

    tracing::info!(event_id = id, "event created");

    let event = Event {
        id,
        name: request.name,
        description: request.description,
        location: request.location,
        category,
    };

    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /events/{id} - update an event by its id
pub async fn update_event(
    State(state): State<EventsState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<Event>> {
    let id = parse_id(&id)?;
    let mut event = state
        .repos
        .events
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no event with id {id}")))?;

    if let Some(name) = request.name {
        event.name = name;
    }
    if let Some(description) = request.description {
        event.description = (!description.is_empty()).then_some(description);
    }
    if let Some(location) = request.location {
        event.location = (!location.is_empty()).then_some(location);
    }

    validation::validate_updated_event(
        &event.name,
        event.description.as_deref(),
        event.location.as_deref(),
    )?;

    if let Some(category_id) = request.category_id {
        event.category = state
            .repos
            .categories
            .find(category_id)
            .await?
            .ok_or_else(|| {
                Error::not_found(anyhow::anyhow!("no category with id {category_id}"))
            })?;
    }

    state.repos.events.update(&event).await?;

    Ok(Json(event))
}

/// DELETE /events/{id} - delete an event by its id
pub async fn delete_event(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let event = state
        .repos
        .events
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no event with id {id}")))?;

    state.repos.events.delete(event.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
