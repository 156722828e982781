//! Repository for the `feedings` table.

use chrono::NaiveDate;
use dogcollector_core::types::DbId;
use sqlx::PgPool;

use crate::models::feeding::{CreateFeeding, Feeding};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, meal, dog_id, created_at";

/// Provides append and read operations for feedings.
pub struct FeedingRepo;

impl FeedingRepo {
    /// Log a feeding, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFeeding) -> Result<Feeding, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedings (date, meal, dog_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feeding>(&query)
            .bind(input.date)
            .bind(input.meal.code())
            .bind(input.dog_id)
            .fetch_one(pool)
            .await
    }

    /// List a dog's feedings, most recent date first.
    pub async fn list_for_dog(pool: &PgPool, dog_id: DbId) -> Result<Vec<Feeding>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedings WHERE dog_id = $1 ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Feeding>(&query)
            .bind(dog_id)
            .fetch_all(pool)
            .await
    }

    /// Count a dog's feedings on a given date.
    pub async fn count_on_date(
        pool: &PgPool,
        dog_id: DbId,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM feedings WHERE dog_id = $1 AND date = $2",
        )
        .bind(dog_id)
        .bind(date)
        .fetch_one(pool)
        .await
    }
}
