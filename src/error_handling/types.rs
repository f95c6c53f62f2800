//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Could not open a connection to the named database.
    #[error("Database connection failed ({database}): {source}")]
    ConnectError {
        /// Database the connection was opened against.
        database: String,
        /// Underlying driver error.
        #[source]
        source: sqlx::Error,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// URL does not fit the `url` column.
    #[error("URL is {len} characters long; the url column holds at most {max}")]
    UrlTooLong {
        /// Length of the rejected URL, in characters.
        len: usize,
        /// Column width.
        max: usize,
    },

    /// Database settings from the environment are unusable.
    #[error("Invalid database configuration: {0}")]
    InvalidConfig(String),
}

/// Transport-level failure categories for the check request.
///
/// HTTP status codes are never a failure here; only errors that prevent a
/// response from being obtained are categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// The URL or request could not be built.
    Builder,
    /// The 10 second request timeout elapsed.
    Timeout,
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// Redirect policy violated (loop or too many hops).
    Redirect,
    /// The request failed while being sent.
    Request,
    /// Reading the response body failed.
    Body,
    /// Decoding the response failed.
    Decode,
    /// Anything else reported by the HTTP client.
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    /// Human-readable label used in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "HTTP request builder error",
            TransportErrorKind::Timeout => "HTTP request timeout error",
            TransportErrorKind::Connect => "HTTP request connect error",
            TransportErrorKind::Redirect => "HTTP request redirect error",
            TransportErrorKind::Request => "HTTP request error",
            TransportErrorKind::Body => "HTTP request body error",
            TransportErrorKind::Decode => "HTTP request decode error",
            TransportErrorKind::Other => "HTTP request other error",
        }
    }
}
