//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO where the entity is editable

pub mod dog;
pub mod feeding;
pub mod photo;
pub mod session;
pub mod toy;
pub mod user;
