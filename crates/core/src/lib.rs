//! Domain core for the village council board.
//!
//! Validation rules, the post identity hash, author resolution, and the
//! error taxonomy shared by the persistence and API layers. No async, no
//! storage concerns.

pub mod error;
pub mod naming;
pub mod post;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
