//! Route definitions for the `/toys` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::toy;
use crate::state::AppState;

/// Toy routes.
///
/// ```text
/// GET    /toys/                 -> list
/// GET    /toys/new              -> new_form
/// POST   /toys/new              -> create
/// GET    /toys/{id}             -> detail
/// GET    /toys/{id}/edit        -> edit_form
/// POST   /toys/{id}/edit        -> update
/// GET    /toys/{id}/delete      -> delete_confirm
/// POST   /toys/{id}/delete      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toys/", get(toy::list))
        .route("/toys/new", get(toy::new_form).post(toy::create))
        .route("/toys/{id}", get(toy::detail))
        .route("/toys/{id}/edit", get(toy::edit_form).post(toy::update))
        .route(
            "/toys/{id}/delete",
            get(toy::delete_confirm).post(toy::delete),
        )
}
