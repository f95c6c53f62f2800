//! Main application modules.
//!
//! This module provides URL normalization and report rendering used by the
//! main application.

pub mod report;
pub mod url;

// Re-export public API
pub use report::{render_report, truncate_value};
pub use url::{normalize_url, parse_target};
