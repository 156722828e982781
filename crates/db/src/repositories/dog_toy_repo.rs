//! Repository for the `dog_toys` association table.
//!
//! The composite primary key makes the relation a set: adding an existing
//! pair and removing a missing pair are both no-ops.

use dogcollector_core::types::DbId;
use sqlx::PgPool;

use crate::models::toy::Toy;

/// Toy columns qualified with the `t` alias for joins.
const TOY_COLUMNS: &str = "t.id, t.name, t.color, t.created_at, t.updated_at";

/// Provides dog/toy association operations.
pub struct DogToyRepo;

impl DogToyRepo {
    /// Associate a toy with a dog.
    ///
    /// Returns `true` only when a new association was created.
    pub async fn add(pool: &PgPool, dog_id: DbId, toy_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO dog_toys (dog_id, toy_id) VALUES ($1, $2) \
             ON CONFLICT (dog_id, toy_id) DO NOTHING",
        )
        .bind(dog_id)
        .bind(toy_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a toy from a dog.
    ///
    /// Returns `true` only when an association was actually removed.
    pub async fn remove(pool: &PgPool, dog_id: DbId, toy_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dog_toys WHERE dog_id = $1 AND toy_id = $2")
            .bind(dog_id)
            .bind(toy_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the toys associated with a dog.
    pub async fn list_for_dog(pool: &PgPool, dog_id: DbId) -> Result<Vec<Toy>, sqlx::Error> {
        let query = format!(
            "SELECT {TOY_COLUMNS} FROM dog_toys dt \
             JOIN toys t ON t.id = dt.toy_id \
             WHERE dt.dog_id = $1 \
             ORDER BY t.id"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(dog_id)
            .fetch_all(pool)
            .await
    }

    /// List every toy the dog does NOT have.
    pub async fn list_not_for_dog(pool: &PgPool, dog_id: DbId) -> Result<Vec<Toy>, sqlx::Error> {
        let query = format!(
            "SELECT {TOY_COLUMNS} FROM toys t \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM dog_toys dt WHERE dt.dog_id = $1 AND dt.toy_id = t.id \
             ) \
             ORDER BY t.id"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(dog_id)
            .fetch_all(pool)
            .await
    }

    /// Count the associations for a dog.
    pub async fn count_for_dog(pool: &PgPool, dog_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dog_toys WHERE dog_id = $1")
            .bind(dog_id)
            .fetch_one(pool)
            .await
    }
}
