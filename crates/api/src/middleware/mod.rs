//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the logged-in user behind the session token;
//!   redirects to the login page when there is none.

pub mod auth;
