//! Category API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tertulia_common::{Error, Result};

use crate::api::EventsState;
use crate::domain::entities::Category;
use crate::domain::filter::CategoryFilterParams;
use crate::domain::validation;

/// Request body for creating or renaming a category
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::bad_request("category id should be an integer"))
}

/// GET /categories - list categories, optionally filtered by name
pub async fn list_categories(
    State(state): State<EventsState>,
    Query(params): Query<CategoryFilterParams>,
) -> Result<Json<Vec<Category>>> {
    let filter = params.to_filter();
    let categories = state.repos.categories.list(&filter).await?;
    Ok(Json(categories))
}

/// GET /categories/{id} - get a single category by its id
pub async fn get_category(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<Json<Category>> {
    let id = parse_id(&id)?;
    let category = find_category(&state, id).await?;
    Ok(Json(category))
}

/// POST /categories - create a new category
pub async fn create_category(
    State(state): State<EventsState>,
    Json(request): Json<CategoryRequest>,
) -> Result<impl IntoResponse> {
    validation::validate_category(&request.name)?;

    let id = state.repos.categories.create(&request.name).await?;
    let category = Category {
        id,
        name: request.name,
    };

    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /categories/{id} - rename a category
pub async fn update_category(
    State(state): State<EventsState>,
    Path(id): Path<String>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    let id = parse_id(&id)?;
    let category = find_category(&state, id).await?;

    validation::validate_category(&request.name)?;

    state.repos.categories.update(category.id, &request.name).await?;

    Ok(Json(Category {
        id: category.id,
        name: request.name,
    }))
}

/// DELETE /categories/{id} - delete a category by its id
pub async fn delete_category(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let category = find_category(&state, id).await?;

    state.repos.categories.delete(category.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn find_category(state: &EventsState, id: i64) -> Result<Category> {
    state
        .repos
        .categories
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(anyhow::anyhow!("no category with id {id}")))
}
