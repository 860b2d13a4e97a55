//! Domain entities for the locations domain

use serde::{Deserialize, Serialize};

/// A stored venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub url: Option<String>,
}

/// Incoming location fields for create requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub url: Option<String>,
}
