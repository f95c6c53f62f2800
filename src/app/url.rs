//! URL normalization utilities.

use log::debug;

/// Normalizes a user-supplied target URL.
///
/// Adds an `https://` prefix if the input does not already start with
/// `http://` or `https://`. The prefix check is case-sensitive. No other
/// rewriting happens; syntax errors surface when the URL is parsed for the
/// request.
pub fn normalize_url(url: &str) -> String {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        let normalized = format!("https://{url}");
        debug!("No scheme in '{url}', using {normalized}");
        normalized
    } else {
        url.to_string()
    }
}

/// Parses a normalized URL into the form the HTTP client sends.
///
/// # Errors
///
/// Returns the `url::ParseError` if the string is not a valid absolute URL.
pub fn parse_target(normalized: &str) -> Result<url::Url, url::ParseError> {
    url::Url::parse(normalized)
}
