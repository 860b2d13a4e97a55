//! Event repository

use crate::domain::entities::{Event, EventRow};
use sqlx::PgPool;
use tertulia_common::{Filter, Result};

/// Joined column list used by every event SELECT.
const EVENT_COLUMNS: &str = "\
    events.id, events.name, events.description, events.location, \
    categories.id AS category_id, categories.name AS category_name";

const EVENT_SOURCE: &str = "FROM events INNER JOIN categories ON events.category_id = categories.id";

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List events matching an assembled filter. An empty filter lists all.
    pub async fn list(&self, filter: &Filter) -> Result<Vec<Event>> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} {EVENT_SOURCE} {} ORDER BY events.id",
            filter.where_clause()
        );
        let rows = filter
            .bind_to(sqlx::query_as::<_, EventRow>(&query))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    /// Find an event by id, joined with its category.
    pub async fn find(&self, id: i64) -> Result<Option<Event>> {
        let query = format!("SELECT {EVENT_COLUMNS} {EVENT_SOURCE} WHERE events.id = $1");
        let row = sqlx::query_as::<_, EventRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Event::from))
    }

    /// Insert a new event. The generated id is returned.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        location: Option<&str>,
        category_id: i64,
    ) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO events (name, description, category_id, location) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(description)
        .bind(category_id)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Full-field replace of an event keyed by its id.
    pub async fn update(&self, event: &Event) -> Result<()> {
        sqlx::query(
            "UPDATE events SET name = $2, description = $3, category_id = $4, location = $5 \
             WHERE id = $1",
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(event.description.as_deref())
        .bind(event.category.id)
        .bind(event.location.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
