//! Handlers that attach toys to dogs and detach them.

use axum::extract::{Path, State};
use axum::response::Redirect;
use dogcollector_core::error::CoreError;
use dogcollector_core::types::DbId;
use dogcollector_db::repositories::{DogToyRepo, ToyRepo};

use super::{ensure_dog_exists, redirect_to_dog};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /dogs/{id}/assoc_toy/{toy_id}
///
/// Associating a toy the dog already has is a no-op.
pub async fn add_toy(
    State(state): State<AppState>,
    user: AuthUser,
    Path((dog_id, toy_id)): Path<(DbId, DbId)>,
) -> AppResult<Redirect> {
    ensure_dog_exists(&state.pool, dog_id).await?;
    if !ToyRepo::exists(&state.pool, toy_id).await? {
        return Err(CoreError::toy_not_found(toy_id).into());
    }

    let added = DogToyRepo::add(&state.pool, dog_id, toy_id).await?;
    tracing::info!(dog_id, toy_id, added, user_id = user.user_id, "Toy associated");
    Ok(redirect_to_dog(dog_id))
}

/// POST /dogs/{id}/unassoc_toy/{toy_id}
///
/// Removing a toy the dog does not have (or that does not exist) is a no-op.
pub async fn remove_toy(
    State(state): State<AppState>,
    user: AuthUser,
    Path((dog_id, toy_id)): Path<(DbId, DbId)>,
) -> AppResult<Redirect> {
    ensure_dog_exists(&state.pool, dog_id).await?;

    let removed = DogToyRepo::remove(&state.pool, dog_id, toy_id).await?;
    tracing::info!(dog_id, toy_id, removed, user_id = user.user_id, "Toy unassociated");
    Ok(redirect_to_dog(dog_id))
}
