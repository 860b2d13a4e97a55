//! Domain entities for the users domain

use serde::{Deserialize, Serialize};

/// A stored user account. The password column is never selected and never
/// serialized back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture: String,
    pub status_id: i64,
    pub role_id: i64,
}

/// Incoming user fields for create and update requests.
///
/// Every field defaults so a sparse body decodes cleanly and fails the
/// validation pass with per-field reasons instead of a deserialization error.
/// Updates ignore `password`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub status_id: i64,
    #[serde(default)]
    pub role_id: i64,
}
