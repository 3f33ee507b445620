//! Row models and request DTOs.
//!
//! The post submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the create and vote request bodies
//! - A resolved insert input produced by the create handler

pub mod post;
