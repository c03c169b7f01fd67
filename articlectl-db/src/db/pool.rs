//! Database connection pool management
//!
//! The pool is created once at startup and handed to every repository.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::Result;

/// Connect using the resolved configuration.
///
/// # Errors
///
/// Returns a config error when no connection is configured, or the
/// driver error when the connection fails.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let options = config.connect_options()?;
    info!(
        host = options.get_host(),
        database = options.get_database().unwrap_or("<default>"),
        "Connecting to PostgreSQL"
    );
    let pool = create_pool_with_options(options, config.pool_size()).await?;
    Ok(pool)
}

/// Create a PostgreSQL connection pool from a connection URL.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/article_db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
}

pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}
