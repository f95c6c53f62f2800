//! Configuration constants.
//!
//! Timeouts, display limits, and database names used across the application.

use std::time::Duration;

/// Timeout for the single GET request issued per check.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with the check request.
pub const USER_AGENT: &str = concat!("header_audit/", env!("CARGO_PKG_VERSION"));

/// Header values longer than this many characters are cut in the report.
pub const MAX_VALUE_DISPLAY_CHARS: usize = 60;

/// Suffix appended to a cut header value.
pub const TRUNCATION_SUFFIX: &str = "...";

// URL validation
/// Width of the `url` column; longer URLs are rejected before insert.
pub const MAX_URL_LENGTH: usize = 255;

// Database names
/// Database created and used when `DB_NAME` is not set.
pub const DEFAULT_DB_NAME: &str = "security_headers";
/// Database connected to while checking for (and creating) the target database.
pub const MAINTENANCE_DB: &str = "postgres";
/// Table holding one row per check.
pub const TABLE_NAME: &str = "header_checks";

// Connection defaults
/// Host used when `DB_HOST` is not set.
pub const DEFAULT_DB_HOST: &str = "localhost";
/// Port used when `DB_PORT` is not set.
pub const DEFAULT_DB_PORT: u16 = 5432;
/// Role used when `DB_USER` is not set.
pub const DEFAULT_DB_USER: &str = "postgres";
