//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use onion_common::{AppError, ConfigError, DatabaseConfig};

/// Failures while opening the pool
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),
}

impl From<PoolError> for AppError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::Config(e) => AppError::Config(e),
            PoolError::Connect(e) => AppError::database(e),
        }
    }
}

/// Create a new PostgreSQL connection pool
///
/// Fails with [`ConfigError::MissingVar`] when no `DATABASE_URL` is configured.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let url = config.require_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(url)
        .await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "PostgreSQL pool ready"
    );
    Ok(pool)
}
