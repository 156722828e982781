//! Photo entity model and DTOs.

use dogcollector_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A photo row from the `photos` table. The binary lives in object storage.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub url: String,
    pub dog_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for recording an uploaded photo.
#[derive(Debug, Clone)]
pub struct CreatePhoto {
    pub dog_id: DbId,
    pub url: String,
}
