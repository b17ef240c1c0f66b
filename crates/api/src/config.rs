use std::path::PathBuf;
use std::str::FromStr;

/// Errors raised while reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables (or a `.env` file).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Site name shown on the admin page.
    pub site_name: String,
    /// Author recorded on pages created without one.
    pub default_author: String,
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
    /// Maximum accepted request body size for uploads, in bytes.
    pub max_upload_bytes: usize,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `HOST`                 | `0.0.0.0`            |
    /// | `PORT`                 | `8080`               |
    /// | `CORS_ORIGINS`         | `*`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                 |
    /// | `SITE_NAME`            | `HTML Page Manager`  |
    /// | `AUTHOR_NAME`          | `Your Name`          |
    /// | `DATABASE_PATH`        | `./data/pages.db`    |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`           |
    /// | `STATIC_DIR`           | `./static`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", "port number", &var("PORT", "8080"))?,
            cors_origins,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                "number of seconds",
                &var("REQUEST_TIMEOUT_SECS", "30"),
            )?,
            site_name: var("SITE_NAME", "HTML Page Manager"),
            default_author: var("AUTHOR_NAME", "Your Name"),
            database_path: PathBuf::from(var("DATABASE_PATH", "./data/pages.db")),
            max_upload_bytes: parse(
                "MAX_UPLOAD_BYTES",
                "byte count",
                &var("MAX_UPLOAD_BYTES", "10485760"),
            )?,
            static_dir: PathBuf::from(var("STATIC_DIR", "./static")),
        })
    }

    /// Whether CORS is configured to accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse<T: FromStr>(key: &'static str, expected: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        expected,
        value: value.to_string(),
    })
}
