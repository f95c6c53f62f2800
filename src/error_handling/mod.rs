//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and database operations
//! - Categorization of HTTP transport failures
//!
//! Failures fall into three groups:
//! - **Fatal**: schema setup cannot reach the database (process exits 1)
//! - **Reported**: the check request fails at the transport level
//! - **Swallowed**: saving a result fails (logged, process still exits 0)

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_transport_error;
pub use types::{DatabaseError, InitializationError, TransportErrorKind};
