//! Account form payloads and username rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::CoreError;

/// Maximum username length, in characters.
pub const MAX_USERNAME_LEN: usize = 150;

/// Letters, digits and `@ . + - _` only.
const USERNAME_PATTERN: &str = r"^[\w.@+-]+$";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(USERNAME_PATTERN).expect("valid regex"));

/// Generic message shown when signup fails. Field-level detail is not exposed.
pub const SIGNUP_ERROR_MESSAGE: &str = "Invalid sign up - try again";

/// Generic message shown when login fails.
pub const LOGIN_ERROR_MESSAGE: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Signup form body (`POST /accounts/signup`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

/// Login form body (`POST /accounts/login`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

/// Validate a username: 1-150 characters from the allowed set.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if len == 0 || len > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be between 1 and {MAX_USERNAME_LEN} characters"
        )));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(CoreError::Validation(
            "Username may contain only letters, numbers, and @/./+/-/_ characters".into(),
        ));
    }
    Ok(())
}

impl SignupForm {
    /// Check the rules that do not need the database: username shape and
    /// matching password confirmation. Password strength is checked by the
    /// caller with its configured minimum length.
    pub fn validate_shape(&self) -> Result<(), CoreError> {
        validate_username(&self.username)?;
        if self.password1 != self.password2 {
            return Err(CoreError::Validation(
                "The two password fields didn't match".into(),
            ));
        }
        Ok(())
    }
}

/// Return `next` only when it is a local absolute path (`/dogs/3`), never a
/// scheme-relative (`//host`) or absolute URL.
pub fn safe_redirect_target(next: Option<&str>) -> Option<&str> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
}
