//! Human-readable report rendering.

use std::fmt::Write;

use crate::check::CheckOutcome;
use crate::config::{MAX_VALUE_DISPLAY_CHARS, TRUNCATION_SUFFIX};

/// Cuts a header value to `MAX_VALUE_DISPLAY_CHARS` characters, appending
/// `...` when anything was removed. Counts characters, not bytes.
pub fn truncate_value(value: &str) -> String {
    match value.char_indices().nth(MAX_VALUE_DISPLAY_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &value[..byte_idx], TRUNCATION_SUFFIX),
        None => value.to_string(),
    }
}

/// Renders the report for one check.
///
/// `url_as_given` is echoed verbatim in the title line, even when the
/// request used a normalized form. Sections for present and missing headers
/// are omitted when empty.
pub fn render_report(url_as_given: &str, outcome: &CheckOutcome) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\nSecurity Header Report for {url_as_given}");
    let _ = writeln!(out, "Compliance Score: {}%", outcome.score());

    let present = outcome.present();
    if !present.is_empty() {
        let _ = writeln!(out, "\nPresent Headers:");
        for (header, value) in &present {
            let _ = writeln!(out, "  {}: {}", header, truncate_value(value));
        }
    }

    let missing = outcome.missing();
    if !missing.is_empty() {
        let _ = writeln!(out, "\nMissing Headers:");
        for header in missing {
            let _ = writeln!(out, "  - {header}");
        }
    }

    out
}
