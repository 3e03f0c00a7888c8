//! `SQLite` credential store.
//!
//! Enable the `sqlx_sqlite` feature to use it. Run [`migrations::run`] once
//! against the pool before constructing the repository.

mod admin;
pub mod migrations;

pub use admin::SqliteAdminRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::{AuthError, LOG_TARGET};

/// Opens a pool and applies migrations.
///
/// # Errors
///
/// Returns `AuthError::DatabaseError` if the database cannot be opened or
/// migrated.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AuthError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| {
            log::error!(target: LOG_TARGET, "msg=\"database connect failed\", error=\"{e}\"");
            AuthError::DatabaseError(e.to_string())
        })?;

    migrations::run(&pool).await.map_err(|e| {
        log::error!(target: LOG_TARGET, "msg=\"migration failed\", error=\"{e}\"");
        AuthError::DatabaseError(e.to_string())
    })?;

    Ok(pool)
}
