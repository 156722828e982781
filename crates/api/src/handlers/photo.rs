//! Handler for uploading a dog photo.

use axum::extract::{Multipart, Path, State};
use axum::response::Redirect;
use dogcollector_core::photo::generate_photo_key;
use dogcollector_core::types::DbId;
use dogcollector_db::models::photo::CreatePhoto;
use dogcollector_db::repositories::PhotoRepo;
use dogcollector_storage::StorageError;

use super::{ensure_dog_exists, redirect_to_dog};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Multipart field carrying the image.
pub const PHOTO_FIELD: &str = "photo-file";

/// POST /dogs/{id}/add_photo
///
/// Uploads the `photo-file` part to object storage under a short random key
/// that keeps the original extension, then records the public URL. A missing
/// file, a failed upload or a failed insert is logged and still redirects to
/// the dog's page.
pub async fn add_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(dog_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    ensure_dog_exists(&state.pool, dog_id).await?;

    let mut upload: Option<(String, Option<String>, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, content_type, data.to_vec()));
    }

    let Some((filename, content_type, data)) = upload.filter(|(name, _, _)| !name.is_empty())
    else {
        tracing::debug!(dog_id, "No photo file submitted");
        return Ok(redirect_to_dog(dog_id));
    };

    let key = generate_photo_key(&filename);
    match state
        .store
        .put_object(&key, data, content_type.as_deref())
        .await
    {
        Ok(()) => {
            let url = state.store.public_url(&key);
            match PhotoRepo::create(&state.pool, &CreatePhoto { dog_id, url }).await {
                Ok(photo) => tracing::info!(
                    photo_id = photo.id,
                    dog_id,
                    key = %key,
                    user_id = user.user_id,
                    username = %user.username,
                    "Photo uploaded"
                ),
                Err(e) => {
                    tracing::error!(dog_id, key = %key, error = %e, "Saving photo failed");
                }
            }
        }
        Err(StorageError::UploadFailed { key, message }) => {
            tracing::error!(dog_id, key = %key, error = %message, "Photo upload failed");
        }
    }

    Ok(redirect_to_dog(dog_id))
}
