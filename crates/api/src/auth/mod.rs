//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing, verification and strength rules.
//! - [`session`] -- opaque session tokens and the session cookie.

pub mod password;
pub mod session;
