//! Database operations.
//!
//! [`Database`] is the persistence gateway: it owns the connection settings
//! and exposes schema bootstrap, insertion, and read-back. Each call opens
//! and closes its own connection.

mod connection;
mod insert;
mod models;
mod query;
mod schema;

use log::{debug, info};

use crate::check::PresentHeaders;
use crate::config::DbConfig;
use crate::error_handling::DatabaseError;

use connection::{close_connection, open_connection};

pub use models::HeaderCheckRecord;

/// Persistence gateway for `header_checks`.
#[derive(Debug, Clone)]
pub struct Database {
    config: DbConfig,
}

impl Database {
    /// Creates a gateway for the database described by `config`. No
    /// connection is opened until an operation runs.
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Creates the database and the `header_checks` table if absent.
    ///
    /// Idempotent; meant to run once per process before the check.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ConnectError` if either the maintenance or the
    /// target database cannot be reached, or `DatabaseError::SqlError` if a
    /// bootstrap statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        schema::ensure_schema(&self.config).await?;
        debug!("Schema ready in database '{}'", self.config.database);
        Ok(())
    }

    /// Inserts one check result and returns the new row id.
    ///
    /// The connection is closed on both success and failure before returning.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::UrlTooLong` (without touching the database) if
    /// `url` does not fit the column, or a connection/SQL error.
    pub async fn save(
        &self,
        url: &str,
        present: &PresentHeaders,
        missing: &[String],
        score: u8,
    ) -> Result<i32, DatabaseError> {
        insert::validate_url_length(url)?;

        let mut conn = open_connection(&self.config, &self.config.database).await?;
        let result = insert::insert_header_check(&mut conn, url, present, missing, score).await;
        close_connection(conn).await;

        let id = result?;
        info!("Saved check for {url} as header_checks row {id}");
        Ok(id)
    }

    /// Reads one stored check by id.
    ///
    /// # Errors
    ///
    /// Returns a connection or SQL error.
    pub async fn load_check(&self, id: i32) -> Result<Option<HeaderCheckRecord>, DatabaseError> {
        let mut conn = open_connection(&self.config, &self.config.database).await?;
        let result = query::fetch_check(&mut conn, id).await;
        close_connection(conn).await;
        result
    }

    /// Reads up to `limit` stored checks, newest first, optionally only
    /// those for `url`.
    ///
    /// # Errors
    ///
    /// Returns a connection or SQL error.
    pub async fn recent_checks(
        &self,
        url: Option<&str>,
        limit: i64,
    ) -> Result<Vec<HeaderCheckRecord>, DatabaseError> {
        let mut conn = open_connection(&self.config, &self.config.database).await?;
        let result = query::fetch_recent_checks(&mut conn, url, limit).await;
        close_connection(conn).await;
        result
    }
}
