//! Repository for the `dogs` table.

use dogcollector_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::{CreateDog, Dog, UpdateDog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, breed, description, age, user_id, created_at, updated_at";

/// Provides CRUD operations for dogs.
pub struct DogRepo;

impl DogRepo {
    /// Insert a new dog, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs (name, breed, description, age, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(&input.description)
            .bind(input.age)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a dog by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a dog with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM dogs WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List every dog regardless of owner, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs ORDER BY id");
        sqlx::query_as::<_, Dog>(&query).fetch_all(pool).await
    }

    /// Replace a dog's editable fields. Name and owner are left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDog,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!(
            "UPDATE dogs SET
                breed = $2,
                description = $3,
                age = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(&input.breed)
            .bind(&input.description)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dog. Toy associations, photos and feedings cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
