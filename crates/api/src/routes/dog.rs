//! Route definitions for the `/dogs` resource, including the dog-scoped
//! feeding, photo and toy association actions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{association, dog, feeding, photo};
use crate::state::AppState;

/// Dog routes. Paths are spelled out in full so `/dogs/` keeps its
/// trailing slash.
///
/// ```text
/// GET    /dogs/                              -> list
/// GET    /dogs/new                           -> new_form
/// POST   /dogs/new                           -> create
/// GET    /dogs/{id}                          -> detail
/// GET    /dogs/{id}/edit                     -> edit_form
/// POST   /dogs/{id}/edit                     -> update
/// GET    /dogs/{id}/delete                   -> delete_confirm
/// POST   /dogs/{id}/delete                   -> delete
/// POST   /dogs/{id}/add_feeding              -> add_feeding
/// POST   /dogs/{id}/add_photo                -> add_photo
/// POST   /dogs/{id}/assoc_toy/{toy_id}       -> add_toy
/// POST   /dogs/{id}/unassoc_toy/{toy_id}     -> remove_toy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dogs/", get(dog::list))
        .route("/dogs/new", get(dog::new_form).post(dog::create))
        .route("/dogs/{id}", get(dog::detail))
        .route("/dogs/{id}/edit", get(dog::edit_form).post(dog::update))
        .route(
            "/dogs/{id}/delete",
            get(dog::delete_confirm).post(dog::delete),
        )
        .route("/dogs/{id}/add_feeding", post(feeding::add_feeding))
        .route("/dogs/{id}/add_photo", post(photo::add_photo))
        .route(
            "/dogs/{id}/assoc_toy/{toy_id}",
            post(association::add_toy),
        )
        .route(
            "/dogs/{id}/unassoc_toy/{toy_id}",
            post(association::remove_toy),
        )
}
