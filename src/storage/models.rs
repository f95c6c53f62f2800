//! Database models.

use chrono::NaiveDateTime;

use crate::check::PresentHeaders;

/// A stored row of the `header_checks` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCheckRecord {
    /// Surrogate key.
    pub id: i32,
    /// Target URL as the user typed it.
    pub url: String,
    /// Server-assigned insertion time.
    pub check_date: Option<NaiveDateTime>,
    /// Present headers decoded from the JSONB object.
    pub headers_present: PresentHeaders,
    /// Missing header names decoded from the JSONB array.
    pub missing_headers: Vec<String>,
    /// Compliance score, 0 to 100.
    pub score: i32,
}
