//! Domain entities for the events domain
//!
//! Optional fields are present-or-absent, never empty-string, so partial
//! updates can tell "leave alone" apart from "clear".

use serde::{Deserialize, Serialize};

/// A category an event can belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// An event, always carrying its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Category,
}

/// Flat row shape produced by the events/categories join.
#[derive(Debug, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category_id: i64,
    pub category_name: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            name: row.name,
            description: row.description,
            location: row.location,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}
