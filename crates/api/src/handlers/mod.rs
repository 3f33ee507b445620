//! Request handlers.
//!
//! Handlers validate input shape, resolve derived fields, delegate to the
//! post repository in `council_db`, and map failures via
//! [`AppError`](crate::error::AppError).

pub mod posts;
