//! Location API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tertulia_common::{Error, Result};

use crate::api::LocationsState;
use crate::domain::entities::{Location, LocationPayload};
use crate::domain::validation;

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::bad_request("location id must be an integer"))
}

/// GET /locations - list all locations
pub async fn list_locations(State(state): State<LocationsState>) -> Result<Json<Vec<Location>>> {
    let locations = state.locations.list().await?;
    Ok(Json(locations))
}

/// GET /locations/{id} - get a single location by its id
pub async fn get_location(
    State(state): State<LocationsState>,
    Path(id): Path<String>,
) -> Result<Json<Location>> {
    let id = parse_id(&id)?;
    let location = state
        .locations
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no location with id {id}")))?;

    Ok(Json(location))
}

/// POST /locations - create a new location
pub async fn create_location(
    State(state): State<LocationsState>,
    Json(payload): Json<LocationPayload>,
) -> Result<impl IntoResponse> {
    validation::validate_location(&payload)?;

    let id = state.locations.create(&payload).await?;

    tracing::info!(location_id = id, "location created");

    Ok((StatusCode::CREATED, Json(json!({ "location_id": id }))))
}

/// DELETE /locations/{id} - delete a location by its id
pub async fn delete_location(
    State(state): State<LocationsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let location = state
        .locations
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no location with id {id}")))?;

    state.locations.delete(location.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertulia_common::Kind;

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("plaza").unwrap_err().kind(), Kind::Validation);
        assert!(parse_id("3").is_ok());
    }
}
