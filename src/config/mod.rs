//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, display limits, database names)
//! - The required security header set
//! - CLI option and database configuration types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::{SecurityHeader, REQUIRED_HEADER_COUNT};
pub use types::{Cli, DbConfig};
