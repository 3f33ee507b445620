use std::sync::Arc;

use council_core::naming::NameGenerator;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: council_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fallback author name source, injected so tests can pin it.
    pub names: Arc<dyn NameGenerator>,
}

impl AppState {
    /// Classify a store failure under an operation-specific message,
    /// gating detail exposure on configuration.
    pub fn store_error(&self, context: &'static str, err: sqlx::Error) -> AppError {
        AppError::store(context, err, self.config.expose_error_detail)
    }
}
