// Shared test helpers for database-backed tests.
//
// Database tests are #[ignore]d by default. Run them against a disposable
// PostgreSQL server with:
//
//   DB_HOST=localhost DB_USER=postgres DB_PASSWORD=postgres \
//       cargo test -- --ignored

use header_audit::{Database, DbConfig};

/// Database name used by tests, kept apart from the real `security_headers`.
pub const TEST_DB_NAME: &str = "header_audit_test";

/// Connection settings from the DB_* environment, pointed at the test database.
#[allow(dead_code)] // Used by other test files
pub fn test_db_config() -> DbConfig {
    let _ = dotenvy::dotenv();
    let mut config = DbConfig::from_env().expect("DB_* environment should be valid");
    config.database = std::env::var("TEST_DB_NAME").unwrap_or_else(|_| TEST_DB_NAME.to_string());
    config
}

/// A gateway whose schema has been bootstrapped.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_database() -> Database {
    let db = Database::new(test_db_config());
    db.ensure_schema()
        .await
        .expect("Failed to bootstrap test database");
    db
}

/// Settings for a PostgreSQL endpoint that refuses connections.
#[allow(dead_code)] // Used by other test files
pub fn unreachable_db_config() -> DbConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    DbConfig {
        host: "127.0.0.1".to_string(),
        port,
        ..Default::default()
    }
}
