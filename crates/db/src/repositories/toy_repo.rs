//! Repository for the `toys` table.

use dogcollector_core::types::DbId;
use sqlx::PgPool;

use crate::models::toy::{Toy, ToyInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, created_at, updated_at";

/// Provides CRUD operations for toys.
pub struct ToyRepo;

impl ToyRepo {
    /// Insert a new toy, returning the created row.
    pub async fn create(pool: &PgPool, input: &ToyInput) -> Result<Toy, sqlx::Error> {
        let query = format!(
            "INSERT INTO toys (name, color)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a toy by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Toy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM toys WHERE id = $1");
        sqlx::query_as::<_, Toy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a toy with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM toys WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all toys, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Toy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM toys ORDER BY id");
        sqlx::query_as::<_, Toy>(&query).fetch_all(pool).await
    }

    /// Replace a toy's name and color.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ToyInput,
    ) -> Result<Option<Toy>, sqlx::Error> {
        let query = format!(
            "UPDATE toys SET
                name = $2,
                color = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a toy. Its dog associations cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM toys WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
