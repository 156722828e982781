//! Handler for recording a feeding.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use dogcollector_core::forms::FeedingForm;
use dogcollector_core::types::DbId;
use dogcollector_db::models::feeding::CreateFeeding;
use dogcollector_db::repositories::FeedingRepo;

use super::{ensure_dog_exists, redirect_to_dog};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /dogs/{id}/add_feeding
///
/// Invalid date or meal input is dropped: nothing is saved and the user is
/// sent back to the dog's page either way.
pub async fn add_feeding(
    State(state): State<AppState>,
    user: AuthUser,
    Path(dog_id): Path<DbId>,
    Form(form): Form<FeedingForm>,
) -> AppResult<Redirect> {
    ensure_dog_exists(&state.pool, dog_id).await?;

    match form.parse() {
        Ok(entry) => {
            let feeding = FeedingRepo::create(
                &state.pool,
                &CreateFeeding {
                    dog_id,
                    date: entry.date,
                    meal: entry.meal,
                },
            )
            .await?;
            tracing::info!(
                feeding_id = feeding.id,
                dog_id,
                user_id = user.user_id,
                "Feeding recorded"
            );
        }
        Err(e) => {
            tracing::warn!(dog_id, error = %e, "Ignoring invalid feeding form");
        }
    }

    Ok(redirect_to_dog(dog_id))
}
