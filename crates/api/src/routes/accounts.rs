//! Route definitions for the `/accounts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Account routes. All public.
///
/// ```text
/// GET    /accounts/signup    -> signup_page
/// POST   /accounts/signup    -> signup
/// GET    /accounts/login     -> login_page
/// POST   /accounts/login     -> login
/// POST   /accounts/logout    -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts/signup",
            get(accounts::signup_page).post(accounts::signup),
        )
        .route(
            "/accounts/login",
            get(accounts::login_page).post(accounts::login),
        )
        .route("/accounts/logout", post(accounts::logout))
}
