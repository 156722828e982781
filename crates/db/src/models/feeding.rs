//! Feeding entity model and DTOs.

use chrono::NaiveDate;
use dogcollector_core::meal::Meal;
use dogcollector_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A feeding row from the `feedings` table. Feedings are append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feeding {
    pub id: DbId,
    pub date: NaiveDate,
    /// Meal code: `B`, `L` or `D`.
    pub meal: String,
    pub dog_id: DbId,
    pub created_at: Timestamp,
}

impl Feeding {
    /// Human-readable meal label, falling back to the raw code.
    pub fn meal_label(&self) -> &str {
        Meal::from_code(&self.meal).map_or(self.meal.as_str(), |meal| meal.label())
    }
}

/// DTO for logging a feeding.
#[derive(Debug, Clone)]
pub struct CreateFeeding {
    pub dog_id: DbId,
    pub date: NaiveDate,
    pub meal: Meal,
}
