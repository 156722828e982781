//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use dogcollector_core::types::DbId;
use dogcollector_db::repositories::SessionRepo;

use crate::auth::session::{hash_session_token, token_from_headers};
use crate::error::AppError;
use crate::state::AppState;

/// The logged-in user, resolved from the session cookie or Bearer token.
///
/// Any handler taking this extractor is login-guarded: a missing, expired,
/// or revoked session (or an inactive user) rejects with
/// [`AppError::LoginRequired`], which redirects to the login page with the
/// requested path as `next`.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let Some(token) = token_from_headers(&parts.headers) else {
            return Err(AppError::LoginRequired { next: path });
        };

        let session = SessionRepo::find_active_user(&state.pool, &hash_session_token(&token))
            .await?
            .ok_or(AppError::LoginRequired { next: path })?;

        tracing::debug!(
            session_id = session.session_id,
            user_id = session.user_id,
            "Session resolved"
        );
        Ok(AuthUser {
            user_id: session.user_id,
            username: session.username,
        })
    }
}
