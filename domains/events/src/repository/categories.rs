//! Category repository

use crate::domain::entities::Category;
use sqlx::PgPool;
use tertulia_common::{Filter, Result};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List categories matching an assembled filter.
    pub async fn list(&self, filter: &Filter) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT id, name FROM categories {} ORDER BY id",
            filter.where_clause()
        );
        let categories = filter
            .bind_to(sqlx::query_as::<_, Category>(&query))
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    /// Insert a new category. The generated id is returned.
    pub async fn create(&self, name: &str) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<()> {
        sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
