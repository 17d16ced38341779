//! Persistence adapter: Diesel/PostgreSQL storage for lookup records.

pub mod models;
pub mod pool;
pub mod schema;

mod diesel_weather_request_repository;

pub use diesel_weather_request_repository::DieselWeatherRequestRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations compiled into the binary from `backend/migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying migrations at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// Could not open a connection to run migrations over.
    #[error("migration connection failed: {message}")]
    Connect { message: String },

    /// A migration failed to apply.
    #[error("migration run failed: {message}")]
    Run { message: String },
}

/// Apply any pending migrations, returning how many ran.
///
/// Runs on a blocking thread because the migration harness drives a
/// synchronous connection.
///
/// # Errors
///
/// Returns [`MigrationError`] when connecting or applying fails.
pub async fn run_pending_migrations(database_url: String) -> Result<usize, MigrationError> {
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url).map_err(|err| {
            MigrationError::Connect {
                message: err.to_string(),
            }
        })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| MigrationError::Run {
                message: err.to_string(),
            })
    })
    .await
    .map_err(|err| MigrationError::Run {
        message: err.to_string(),
    })?
}
