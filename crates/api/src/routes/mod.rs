pub mod accounts;
pub mod dog;
pub mod health;
pub mod pages;
pub mod toy;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                      home (public)
/// /about                                 about (public)
///
/// /accounts/signup                       signup form, submit (public)
/// /accounts/login                        login form, submit (public)
/// /accounts/logout                       logout (public, POST)
///
/// /dogs/                                 list
/// /dogs/new                              create form, submit
/// /dogs/{id}                             detail
/// /dogs/{id}/edit                        edit form, submit
/// /dogs/{id}/delete                      confirm, submit
/// /dogs/{id}/add_feeding                 record feeding (POST)
/// /dogs/{id}/add_photo                   upload photo (POST, multipart)
/// /dogs/{id}/assoc_toy/{toy_id}          attach toy (POST)
/// /dogs/{id}/unassoc_toy/{toy_id}        detach toy (POST)
///
/// /toys/                                 list
/// /toys/new                              create form, submit
/// /toys/{id}                             detail
/// /toys/{id}/edit                        edit form, submit
/// /toys/{id}/delete                      confirm, submit
/// ```
///
/// Everything under `/dogs` and `/toys` requires a logged-in user.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(accounts::router())
        .merge(dog::router())
        .merge(toy::router())
}
