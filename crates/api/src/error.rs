use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use council_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a store failure variant.
/// Implements [`IntoResponse`] to produce the `{ "success": false, ... }`
/// JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `council_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unexpected persistence failure, reported under an
    /// operation-specific message. `detail` is populated only outside
    /// production.
    #[error("{context}")]
    Store {
        context: &'static str,
        detail: Option<String>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a store failure under an operation-specific message.
    ///
    /// Unique violations on `uq_`-prefixed constraints map to Conflict;
    /// the constraint on `council_posts.hash` is what closes the create
    /// check-then-insert race at the storage layer. Everything else is an
    /// opaque store error with detail gated by `expose_detail`.
    pub fn store(context: &'static str, err: sqlx::Error, expose_detail: bool) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // PostgreSQL unique constraint violation: error code 23505.
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
            {
                return CoreError::Conflict("Post with this hash already exists".to_string())
                    .into();
            }
        }
        tracing::error!(error = %err, context, "Store error");
        AppError::Store {
            context,
            detail: expose_detail.then(|| err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"), None)
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            },
            AppError::Store { context, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string(), detail)
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(detail) = detail {
            body["error"] = json!(detail);
        }

        (status, axum::Json(body)).into_response()
    }
}
