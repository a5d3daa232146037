//! Configuration loaded from the environment.
//!
//! Variables may come from the real environment or from a `.env` file in
//! the working directory; real variables win.
//!
//! Required:
//! - `DATABASE_URL` -- `PostgreSQL` connection string
//!
//! Optional:
//! - `PORT` -- listen port (default 8080, bound on all interfaces)
//! - `ALLOWED_ORIGIN` -- the browser client's origin (default `http://localhost:3000`)
//! - `RUST_LOG` -- log filter (default `info`)

use std::path::PathBuf;

use axum::http::HeaderValue;
use emoji_api::{DEFAULT_ALLOWED_ORIGIN, ServerConfig};

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required env var {name}")]
    Missing {
        /// Name of the variable.
        name: &'static str,
    },

    /// A variable is set but unusable.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Name of the variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A `.env` file exists but could not be read or parsed.
    #[error("failed to load .env file: {source}")]
    Dotenv {
        /// The underlying dotenv error.
        #[from]
        source: dotenvy::Error,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// TCP port to listen on.
    pub port: u16,
    /// The single origin admitted by CORS.
    pub allowed_origin: HeaderValue,
}

impl ServerSettings {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing {
                name: "DATABASE_URL",
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let allowed_origin = match lookup("ALLOWED_ORIGIN") {
            Some(raw) => parse_origin(raw.trim())?,
            None => HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        };

        Ok(Self {
            database_url,
            port,
            allowed_origin,
        })
    }

    /// The listener configuration: all interfaces on the configured port.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            ..ServerConfig::default()
        }
    }
}

/// Parse the single CORS origin.
///
/// A wildcard cannot be combined with credentialed CORS, and an empty
/// value would admit nothing.
fn parse_origin(raw: &str) -> Result<HeaderValue, ConfigError> {
    if raw.is_empty() || raw == "*" {
        return Err(ConfigError::Invalid {
            name: "ALLOWED_ORIGIN",
            reason: format!("{raw:?} is not a single origin"),
        });
    }

    HeaderValue::from_str(raw).map_err(|e| ConfigError::Invalid {
        name: "ALLOWED_ORIGIN",
        reason: format!("{e}"),
    })
}

/// Seed the process environment from `./.env` if one exists.
///
/// Returns the path that was loaded, or `None` when there is no file.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}
