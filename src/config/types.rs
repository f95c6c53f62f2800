//! Configuration types and CLI options.
//!
//! `Cli` is the command-line surface (one positional URL). `DbConfig` is built
//! once from the environment at startup and handed to the storage layer.

use clap::Parser;

use crate::config::constants::{DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_USER};
use crate::error_handling::DatabaseError;

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Scheme is optional; https:// is assumed
/// header_audit example.com
///
/// header_audit http://localhost:8080/login
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "header_audit",
    version,
    about = "Security Header Checker",
    long_about = "Fetches a URL, reports which security headers it sends, and stores the result in PostgreSQL.\n\nDatabase settings are read from DB_HOST, DB_PORT, DB_USER, DB_PASSWORD and DB_NAME (a .env file is loaded if present)."
)]
pub struct Cli {
    /// URL to check (e.g., https://example.com)
    #[arg(value_parser = parse_url_arg)]
    pub url: String,
}

/// Rejects blank targets; everything else is passed through untouched so the
/// report can echo it verbatim.
fn parse_url_arg(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("URL must not be empty".to_string());
    }
    Ok(raw.to_string())
}

/// PostgreSQL connection settings.
///
/// Constructed once at process start and passed explicitly to
/// [`crate::storage::Database`]; nothing reads the environment after that.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Server host name or address (`DB_HOST`).
    pub host: String,
    /// Server port (`DB_PORT`).
    pub port: u16,
    /// Login role (`DB_USER`).
    pub user: String,
    /// Password for `user` (`DB_PASSWORD`); may be empty.
    pub password: String,
    /// Target database; created on first run if missing.
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: DEFAULT_DB_USER.to_string(),
            password: String::new(),
            database: DEFAULT_DB_NAME.to_string(),
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` from
    /// the process environment. Unset or empty variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidConfig` if `DB_PORT` is not a valid port.
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`], but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidConfig` if `DB_PORT` is not a valid port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("DB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                DatabaseError::InvalidConfig(format!("DB_PORT '{}' is not a valid port: {e}", raw))
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("DB_HOST").unwrap_or(defaults.host),
            port,
            user: get("DB_USER").unwrap_or(defaults.user),
            // An empty password is legitimate (trust auth), so only absence falls back.
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            database: get("DB_NAME").unwrap_or(defaults.database),
        })
    }
}
