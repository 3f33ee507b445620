/// Server configuration loaded from environment variables.
///
/// Constructed once at startup and carried in
/// [`AppState`](crate::state::AppState); request handling never reads the
/// environment directly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// PostgreSQL connection string. Required.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A `*` entry produces an open policy.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Include store error detail in 500 bodies. True unless `APP_ENV` is
    /// `production`.
    pub expose_error_detail: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `DATABASE_URL`         | — (required)  |
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `3001`        |
    /// | `CORS_ORIGINS`         | `*`           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    /// | `APP_ENV`              | `development` |
    ///
    /// Panics if `DATABASE_URL` is unset or a numeric variable fails to
    /// parse; the process must not come up half-configured.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let expose_error_detail = app_env != "production";

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            expose_error_detail,
        }
    }
}
