//! Header evaluation and scoring.
//!
//! Pure functions over a response's `HeaderMap`; no I/O.

use reqwest::header::{HeaderMap, HeaderValue};
use strum::IntoEnumIterator;

use super::types::PresentHeaders;
use crate::config::{SecurityHeader, REQUIRED_HEADER_COUNT};

/// Splits the required headers into present (with values) and missing.
///
/// Iterates the required set in declaration order, so both collections come
/// out in that order. Lookup is case-insensitive. If a header is repeated,
/// the first value wins.
pub fn evaluate_headers(headers: &HeaderMap) -> (PresentHeaders, Vec<String>) {
    let mut present = PresentHeaders::new();
    let mut missing = Vec::new();

    for header in SecurityHeader::iter() {
        match headers.get(header.as_str()) {
            Some(value) => {
                present.insert(header.as_str().to_string(), header_value_to_string(value));
            }
            None => missing.push(header.as_str().to_string()),
        }
    }

    (present, missing)
}

/// Compliance score: `floor(100 * present / REQUIRED_HEADER_COUNT)`.
///
/// Counts above the required set size are clamped to 100.
pub fn compute_score(present_count: usize) -> u8 {
    let present_count = present_count.min(REQUIRED_HEADER_COUNT);
    // Bounded by 100 after the clamp, so the cast cannot truncate.
    (100 * present_count / REQUIRED_HEADER_COUNT) as u8
}

// Non-visible-ASCII values are kept (lossily) so the header still counts.
fn header_value_to_string(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;

    fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_score_boundaries() {
        assert_eq!(compute_score(0), 0);
        assert_eq!(compute_score(7), 100);
        assert_eq!(compute_score(8), 100);
    }

    #[test]
    fn test_score_truncates() {
        assert_eq!(compute_score(1), 14);
        assert_eq!(compute_score(2), 28);
        assert_eq!(compute_score(3), 42);
        assert_eq!(compute_score(4), 57);
        assert_eq!(compute_score(5), 71);
        assert_eq!(compute_score(6), 85);
    }

    #[test]
    fn test_evaluate_no_headers() {
        let (present, missing) = evaluate_headers(&HeaderMap::new());
        assert!(present.is_empty());
        assert_eq!(missing.len(), REQUIRED_HEADER_COUNT);
        assert_eq!(missing[0], "Content-Security-Policy");
        assert_eq!(missing[6], "Permissions-Policy");
    }

    #[test]
    fn test_evaluate_all_headers() {
        let pairs: Vec<(&str, &str)> = SecurityHeader::iter().map(|h| (h.as_str(), "x")).collect();
        let (present, missing) = evaluate_headers(&header_map(&pairs));
        assert_eq!(present.len(), REQUIRED_HEADER_COUNT);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_every_subset_partitions_required_set() {
        let all: Vec<SecurityHeader> = SecurityHeader::iter().collect();
        for mask in 0u32..(1 << REQUIRED_HEADER_COUNT) {
            let subset: Vec<(&str, &str)> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, h)| (h.as_str(), "v"))
                .collect();
            let (present, missing) = evaluate_headers(&header_map(&subset));
            assert_eq!(present.len(), subset.len(), "mask {mask:#b}");
            assert_eq!(present.len() + missing.len(), REQUIRED_HEADER_COUNT);
            assert_eq!(
                compute_score(present.len()) as usize,
                100 * subset.len() / REQUIRED_HEADER_COUNT
            );
        }
    }

    #[test]
    fn test_evaluate_is_case_insensitive_and_ordered() {
        let map = header_map(&[
            ("permissions-policy", "geolocation=()"),
            ("x-frame-options", "DENY"),
            ("CONTENT-SECURITY-POLICY", "default-src 'self'"),
        ]);
        let (present, missing) = evaluate_headers(&map);
        let keys: Vec<&str> = present.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["Content-Security-Policy", "X-Frame-Options", "Permissions-Policy"]
        );
        assert_eq!(present["X-Frame-Options"], "DENY");
        assert_eq!(
            missing,
            vec![
                "Strict-Transport-Security",
                "X-Content-Type-Options",
                "X-XSS-Protection",
                "Referrer-Policy",
            ]
        );
    }

    #[test]
    fn test_evaluate_ignores_unrelated_headers() {
        let map = header_map(&[("Server", "nginx"), ("X-Powered-By", "PHP")]);
        let (present, missing) = evaluate_headers(&map);
        assert!(present.is_empty());
        assert_eq!(missing.len(), REQUIRED_HEADER_COUNT);
    }

    #[test]
    fn test_evaluate_repeated_header_keeps_first() {
        let map = header_map(&[("X-Frame-Options", "DENY"), ("X-Frame-Options", "SAMEORIGIN")]);
        let (present, _) = evaluate_headers(&map);
        assert_eq!(present["X-Frame-Options"], "DENY");
    }

    #[test]
    fn test_evaluate_non_ascii_value_still_present() {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_bytes(b"no-referrer \xff").unwrap(),
        );
        let (present, _) = evaluate_headers(&map);
        assert!(present["Referrer-Policy"].starts_with("no-referrer"));
    }
}
