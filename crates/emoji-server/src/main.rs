//! Emoji board backend binary.
//!
//! Serves the emoji REST API backed by `PostgreSQL`.
//!
//! # Startup Sequence
//!
//! 1. Seed the environment from `.env` (if present)
//! 2. Initialize structured logging (tracing)
//! 3. Load configuration from environment variables
//! 4. Connect to `PostgreSQL` (fatal on failure)
//! 5. Serve HTTP until `Ctrl-C` / `SIGTERM`
//! 6. Close the connection pool

mod config;
mod error;

use std::sync::Arc;

use emoji_api::{AppState, start_server};
use emoji_db::PostgresPool;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerSettings;
use crate::error::StartupError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is missing or invalid, the database
/// is unreachable, or the listener cannot bind.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Read before the subscriber is built so RUST_LOG in .env applies.
    let dotenv = config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("emoji-server starting");

    match dotenv.inspect_err(|e| error!(error = %e, "Error loading .env file"))? {
        Some(path) => info!(path = %path.display(), "Loaded .env file"),
        None => debug!("No .env file found"),
    }

    let settings =
        ServerSettings::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(
        port = settings.port,
        allowed_origin = ?settings.allowed_origin,
        "Configuration loaded"
    );

    let pool = PostgresPool::connect(&settings.database_url)
        .await
        .inspect_err(|e| error!(error = %e, "Error connecting to the database"))?;
    info!("Successfully connected to the database");

    let state = Arc::new(
        AppState::new(pool.clone()).with_allowed_origin(settings.allowed_origin.clone()),
    );

    let served = start_server(&settings.server_config(), state).await;
    pool.close().await;
    served.inspect_err(|e| error!(error = %e, "Server exited with error"))?;

    info!("emoji-server stopped");
    Ok(())
}
