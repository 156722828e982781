use crate::types::DbId;

/// Domain-level failures shared by every layer above this crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn dog_not_found(id: DbId) -> Self {
        Self::NotFound { entity: "Dog", id }
    }

    pub fn toy_not_found(id: DbId) -> Self {
        Self::NotFound { entity: "Toy", id }
    }
}
