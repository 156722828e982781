//! Toy entity model and DTOs.

use dogcollector_core::forms::ToyFields;
use dogcollector_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A toy row from the `toys` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Toy {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a toy's fields.
#[derive(Debug, Clone)]
pub struct ToyInput {
    pub name: String,
    pub color: String,
}

impl From<ToyFields> for ToyInput {
    fn from(fields: ToyFields) -> Self {
        Self {
            name: fields.name,
            color: fields.color,
        }
    }
}
