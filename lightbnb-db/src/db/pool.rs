//! Postgres pool for the LightBnB store
//!
//! One entry point, [`connect`], sized from [`StoreConfig`]. Repositories
//! borrow the pool; nothing here is process-global.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
pub use sqlx::PgPool;

use crate::config::StoreConfig;

/// Pool size when the config does not set `max_connections`.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool against `config.database_url`.
///
/// A malformed URL fails before any connection attempt.
///
/// ```ignore
/// let pool = lightbnb_db::db::connect(&StoreConfig::load()?).await?;
/// ```
pub async fn connect(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    let options: PgConnectOptions = config.database_url.parse()?;

    tracing::debug!(
        max_connections = config.max_connections,
        "connecting to database"
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}
