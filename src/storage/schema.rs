//! Schema bootstrap.
//!
//! Creates the target database and the `header_checks` table when they are
//! missing. Safe to run on every invocation.

use log::info;
use sqlx::postgres::PgConnection;

use super::connection::{close_connection, open_connection, quote_identifier};
use crate::config::{DbConfig, MAINTENANCE_DB, TABLE_NAME};
use crate::error_handling::DatabaseError;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS header_checks (
    id SERIAL PRIMARY KEY,
    url VARCHAR(255) NOT NULL,
    check_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    headers_present JSONB,
    missing_headers JSONB,
    score INTEGER
)";

/// Ensures the configured database and the `header_checks` table exist.
///
/// Connects to the maintenance database first to create the target database
/// if needed, then connects to the target database to create the table.
pub(crate) async fn ensure_schema(config: &DbConfig) -> Result<(), DatabaseError> {
    let mut conn = open_connection(config, MAINTENANCE_DB).await?;
    let result = ensure_database(&mut conn, &config.database).await;
    close_connection(conn).await;
    result?;

    let mut conn = open_connection(config, &config.database).await?;
    let result = ensure_table(&mut conn).await;
    close_connection(conn).await;
    result
}

async fn ensure_database(conn: &mut PgConnection, database: &str) -> Result<(), DatabaseError> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(database)
            .fetch_one(&mut *conn)
            .await?;

    if !exists {
        info!("Creating database '{database}'...");
        // CREATE DATABASE takes no bind parameters and must not run in a
        // transaction block, so it goes over the simple query protocol.
        let statement = format!("CREATE DATABASE {}", quote_identifier(database));
        sqlx::raw_sql(&statement).execute(&mut *conn).await?;
    }

    Ok(())
}

async fn ensure_table(conn: &mut PgConnection) -> Result<(), DatabaseError> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = $1
        )",
    )
    .bind(TABLE_NAME)
    .fetch_one(&mut *conn)
    .await?;

    if !exists {
        info!("Creating table '{TABLE_NAME}'...");
        sqlx::query(CREATE_TABLE_SQL).execute(&mut *conn).await?;
    }

    Ok(())
}
