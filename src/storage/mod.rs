//! SQLite-backed persistence for the help-desk core.
//!
//! Everything here stages changes only: each function takes a
//! caller-supplied executor, and the service layer decides where a
//! transaction begins and commits.

pub mod reference;
pub mod repository;
pub mod schema;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Opens (creating if missing) the configured database file and prepares
/// the schema.
///
/// The pool holds a single connection: the store serves one desktop user,
/// and SQLite serializes writers anyway.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    schema::init(&pool).await?;
    debug!(path = %config.path.display(), "ticket store ready");
    Ok(pool)
}

/// Opens a private in-memory database with the schema prepared.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    schema::init(&pool).await?;
    Ok(pool)
}
