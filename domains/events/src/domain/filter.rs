//! Recognized list-filter parameters for the events domain
//!
//! The builder methods run in the fixed order declared here, never the order
//! the query string arrived in, so two requests with the same parameters
//! always produce the same SQL.

use serde::Deserialize;
use tertulia_common::{Filter, FilterBuilder};

/// Optional query parameters accepted by `GET /events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilterParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Ambiguous on purpose: a numeric value matches the category id exactly,
    /// anything else substring-matches the category name.
    pub category: Option<String>,
}

impl EventFilterParams {
    pub fn to_filter(&self) -> Filter {
        FilterBuilder::new()
            .contains("events.name", self.name.as_deref())
            .contains("events.description", self.description.as_deref())
            .contains("events.location", self.location.as_deref())
            .equals_or_contains("categories.id", "categories.name", self.category.as_deref())
            .build()
    }
}

/// Optional query parameters accepted by `GET /categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryFilterParams {
    pub name: Option<String>,
}

impl CategoryFilterParams {
    pub fn to_filter(&self) -> Filter {
        FilterBuilder::new()
            .contains("name", self.name.as_deref())
            .build()
    }
}
