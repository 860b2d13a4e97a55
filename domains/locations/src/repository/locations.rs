//! Location repository

use sqlx::PgPool;
use tertulia_common::Result;

use crate::domain::entities::{Location, LocationPayload};

const LOCATION_COLUMNS: &str = "id, name, address, url";

#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Location>> {
        let query = format!("SELECT {LOCATION_COLUMNS} FROM locations ORDER BY id");
        let locations = sqlx::query_as::<_, Location>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(locations)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Location>> {
        let query = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1");
        let location = sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(location)
    }

    /// Insert a new location. The generated id is returned.
    pub async fn create(&self, location: &LocationPayload) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO locations (name, address, url) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&location.name)
        .bind(&location.address)
        .bind(location.url.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
