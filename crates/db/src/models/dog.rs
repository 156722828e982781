//! Dog entity model and DTOs.

use dogcollector_core::forms::{DogFields, DogUpdateFields};
use dogcollector_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A dog row from the `dogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
    /// The user who created the dog.
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new dog.
#[derive(Debug, Clone)]
pub struct CreateDog {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
    pub user_id: DbId,
}

impl CreateDog {
    /// Attach the creating user to validated form fields.
    pub fn from_fields(fields: DogFields, user_id: DbId) -> Self {
        Self {
            name: fields.name,
            breed: fields.breed,
            description: fields.description,
            age: fields.age,
            user_id,
        }
    }
}

/// DTO for updating a dog. The name and owner are immutable.
#[derive(Debug, Clone)]
pub struct UpdateDog {
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl From<DogUpdateFields> for UpdateDog {
    fn from(fields: DogUpdateFields) -> Self {
        Self {
            breed: fields.breed,
            description: fields.description,
            age: fields.age,
        }
    }
}
