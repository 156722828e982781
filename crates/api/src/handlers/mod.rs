//! Request handlers, one module per resource.
//!
//! Read handlers return the page context a template would render, as JSON.
//! Form submissions answer with a `303 See Other` redirect. Every handler
//! except the public pages and account forms takes an
//! [`AuthUser`](crate::middleware::auth::AuthUser) and is therefore
//! login-guarded.

pub mod accounts;
pub mod association;
pub mod dog;
pub mod feeding;
pub mod pages;
pub mod photo;
pub mod toy;

use axum::response::Redirect;
use dogcollector_core::error::CoreError;
use dogcollector_core::types::DbId;
use dogcollector_db::repositories::DogRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Redirect to a dog's detail page.
pub(crate) fn redirect_to_dog(dog_id: DbId) -> Redirect {
    Redirect::to(&format!("/dogs/{dog_id}"))
}

/// Fail with 404 unless the dog exists.
pub(crate) async fn ensure_dog_exists(pool: &PgPool, dog_id: DbId) -> AppResult<()> {
    if DogRepo::exists(pool, dog_id).await? {
        Ok(())
    } else {
        Err(CoreError::dog_not_found(dog_id).into())
    }
}
