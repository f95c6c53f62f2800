//! Database connection management.
//!
//! Every storage operation opens its own `PgConnection`, uses it, and closes
//! it before returning. There is no pool: a run performs at most three short
//! operations in sequence.

use log::{debug, error, warn};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::config::DbConfig;
use crate::error_handling::DatabaseError;

/// Builds connect options for `database` using the credentials in `config`.
pub(crate) fn connect_options(config: &DbConfig, database: &str) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(database)
}

/// Opens a connection to `database`.
pub(crate) async fn open_connection(
    config: &DbConfig,
    database: &str,
) -> Result<PgConnection, DatabaseError> {
    debug!(
        "Connecting to database '{}' at {}:{} as {}",
        database, config.host, config.port, config.user
    );
    PgConnection::connect_with(&connect_options(config, database))
        .await
        .map_err(|e| {
            error!("Database connection failed: {e}");
            DatabaseError::ConnectError {
                database: database.to_string(),
                source: e,
            }
        })
}

/// Closes a connection, logging (not returning) any error.
///
/// Called on success and failure paths alike so the socket is released
/// before the operation returns.
pub(crate) async fn close_connection(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {e}");
    }
}

/// Quotes a PostgreSQL identifier (for statements that cannot take a bind
/// parameter, such as `CREATE DATABASE`).
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_plain() {
        assert_eq!(quote_identifier("security_headers"), "\"security_headers\"");
    }

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_connect_options_use_config() {
        let config = DbConfig {
            host: "db.internal".to_string(),
            port: 6543,
            user: "auditor".to_string(),
            password: "pw".to_string(),
            database: "audits".to_string(),
        };
        let options = connect_options(&config, "postgres");
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "auditor");
        assert_eq!(options.get_database(), Some("postgres"));
    }

    #[tokio::test]
    async fn test_open_connection_refused_is_connect_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = DbConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..Default::default()
        };
        let result = open_connection(&config, "postgres").await;
        match result {
            Err(DatabaseError::ConnectError { database, .. }) => assert_eq!(database, "postgres"),
            other => panic!("expected ConnectError, got {:?}", other.map(|_| ())),
        }
    }
}
