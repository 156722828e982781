//! Handlers for the `/accounts` resource (signup, login, logout).
//!
//! These routes are public. Signup and login open a session and set the
//! session cookie; logout revokes it.

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use chrono::{Duration, Utc};
use dogcollector_core::accounts::{
    safe_redirect_target, LoginForm, SignupForm, LOGIN_ERROR_MESSAGE, SIGNUP_ERROR_MESSAGE,
};
use dogcollector_core::types::DbId;
use dogcollector_db::models::session::CreateSession;
use dogcollector_db::models::user::CreateUser;
use dogcollector_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::{
    clear_session_cookie, generate_session_token, hash_session_token, session_cookie,
    token_from_headers,
};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::state::AppState;

/// Where a user lands after signing up or logging in without a `next`.
const HOME_AFTER_LOGIN: &str = "/dogs/";

/// Unique constraint on `users.username`.
const USERNAME_CONSTRAINT: &str = "uq_users_username";

// ---------------------------------------------------------------------------
// Page contexts
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SignupPage {
    pub error_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LoginPage {
    /// Path to return to after a successful login.
    pub next: Option<String>,
    pub error_message: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /accounts/signup
pub async fn signup_page() -> Json<SignupPage> {
    Json(SignupPage {
        error_message: None,
    })
}

/// POST /accounts/signup
///
/// Creates the account, logs the new user in, and redirects to the dog list.
/// Any failure re-renders the form with a single generic message.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    let shape = form.validate_shape().map_err(|e| e.to_string()).and_then(|()| {
        validate_password_strength(&form.password1, state.config.min_password_length)
    });
    if let Err(reason) = shape {
        tracing::info!(username = %form.username, reason = %reason, "Signup rejected");
        return Ok(signup_failed());
    }

    if UserRepo::username_exists(&state.pool, &form.username).await? {
        tracing::info!(username = %form.username, "Signup rejected: username taken");
        return Ok(signup_failed());
    }

    let password_hash = hash_password(&form.password1)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let created = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: form.username.clone(),
            password_hash,
        },
    )
    .await;
    let user = match created {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e, USERNAME_CONSTRAINT) => {
            tracing::info!(username = %form.username, "Signup rejected: username taken");
            return Ok(signup_failed());
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(user_id = user.id, username = %user.username, "User signed up");

    open_session(&state, user.id, HOME_AFTER_LOGIN).await
}

/// GET /accounts/login
pub async fn login_page(Query(query): Query<LoginQuery>) -> Json<LoginPage> {
    Json(LoginPage {
        next: query.next,
        error_message: None,
    })
}

/// POST /accounts/login
///
/// On success redirects to `next` when it is a local path, otherwise to the
/// dog list. Unknown users, wrong passwords and deactivated accounts all get
/// the same message.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user) = UserRepo::find_by_username(&state.pool, &form.username).await? else {
        return Ok(login_failed(form.next));
    };

    let password_valid = verify_password(&form.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid || !user.is_active {
        tracing::info!(user_id = user.id, "Login rejected");
        return Ok(login_failed(form.next));
    }

    UserRepo::record_login(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, "User logged in");

    let target = safe_redirect_target(form.next.as_deref()).unwrap_or(HOME_AFTER_LOGIN);
    open_session(&state, user.id, target).await
}

/// POST /accounts/logout
///
/// Revokes the current session, if any, and clears the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = token_from_headers(&headers) {
        let revoked = SessionRepo::revoke_by_token_hash(&state.pool, &hash_session_token(&token))
            .await?;
        tracing::info!(revoked, "User logged out");
    }

    let cookie = clear_session_cookie(&state.config.session);
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a session for `user_id`, set its cookie, and redirect to `target`.
async fn open_session(state: &AppState, user_id: DbId, target: &str) -> AppResult<Response> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + Duration::days(state.config.session.ttl_days);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    let cookie = session_cookie(&token, &state.config.session);
    Ok(([(SET_COOKIE, cookie)], Redirect::to(target)).into_response())
}

fn signup_failed() -> Response {
    let page = SignupPage {
        error_message: Some(SIGNUP_ERROR_MESSAGE),
    };
    (StatusCode::BAD_REQUEST, Json(page)).into_response()
}

fn login_failed(next: Option<String>) -> Response {
    let page = LoginPage {
        next,
        error_message: Some(LOGIN_ERROR_MESSAGE),
    };
    (StatusCode::BAD_REQUEST, Json(page)).into_response()
}
