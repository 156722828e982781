//! Repository for the `photos` table.

use dogcollector_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{CreatePhoto, Photo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, url, dog_id, created_at";

/// Provides append and read operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Record an uploaded photo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (url, dog_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(&input.url)
            .bind(input.dog_id)
            .fetch_one(pool)
            .await
    }

    /// List a dog's photos in upload order.
    pub async fn list_for_dog(pool: &PgPool, dog_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE dog_id = $1 ORDER BY id");
        sqlx::query_as::<_, Photo>(&query)
            .bind(dog_id)
            .fetch_all(pool)
            .await
    }
}
