//! Embedded schema migrations.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    #[error("failed to apply migrations: {0}")]
    Apply(String),
    #[error("migration task panicked: {0}")]
    Join(String),
}

/// Apply every pending migration against `database_url`.
///
/// Diesel's migration harness is synchronous, so the work runs on the
/// blocking thread pool with a dedicated connection.
pub async fn run_pending(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || -> Result<(), MigrationError> {
        let mut conn = PgConnection::establish(&url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;
        for version in &applied {
            info!(%version, "applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Join(err.to_string()))?
}
