//! Check result types.

use indexmap::IndexMap;

use crate::error_handling::TransportErrorKind;

/// Present security headers, keyed by canonical name, in required-set order.
pub type PresentHeaders = IndexMap<String, String>;

/// Scored result of a check that obtained a response.
///
/// Invariant: `present.len() + missing.len() == REQUIRED_HEADER_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Normalized URL that was requested.
    pub url: String,
    /// Required headers the response carried, with their values.
    pub present: PresentHeaders,
    /// Required headers the response lacked, in required-set order.
    pub missing: Vec<String>,
    /// Truncated percentage, 0 to 100.
    pub score: u8,
}

/// Outcome of one check.
///
/// `Failed` means no response was obtained at all. It renders and persists
/// exactly like an empty result with score 0 would, but stays distinguishable
/// from a site that answered without any required header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A response was obtained and evaluated.
    Scored(CheckResult),
    /// No response was obtained.
    Failed {
        /// Normalized URL that was attempted.
        url: String,
        /// Category of the transport failure.
        kind: TransportErrorKind,
        /// Error text from the HTTP client or URL parser.
        message: String,
    },
}

impl CheckOutcome {
    /// Normalized URL that was (or would have been) requested.
    pub fn url(&self) -> &str {
        match self {
            CheckOutcome::Scored(result) => &result.url,
            CheckOutcome::Failed { url, .. } => url,
        }
    }

    /// Present headers; empty on failure.
    pub fn present(&self) -> PresentHeaders {
        match self {
            CheckOutcome::Scored(result) => result.present.clone(),
            CheckOutcome::Failed { .. } => PresentHeaders::new(),
        }
    }

    /// Missing header names; empty on failure.
    pub fn missing(&self) -> &[String] {
        match self {
            CheckOutcome::Scored(result) => &result.missing,
            CheckOutcome::Failed { .. } => &[],
        }
    }

    /// Compliance score; 0 on failure.
    pub fn score(&self) -> u8 {
        match self {
            CheckOutcome::Scored(result) => result.score,
            CheckOutcome::Failed { .. } => 0,
        }
    }

    /// The scored result, if a response was obtained.
    pub fn as_result(&self) -> Option<&CheckResult> {
        match self {
            CheckOutcome::Scored(result) => Some(result),
            CheckOutcome::Failed { .. } => None,
        }
    }

    /// Whether there is anything to persist (present or missing non-empty).
    pub fn is_persistable(&self) -> bool {
        match self {
            CheckOutcome::Scored(result) => {
                !result.present.is_empty() || !result.missing.is_empty()
            }
            CheckOutcome::Failed { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> CheckOutcome {
        CheckOutcome::Failed {
            url: "https://unreachable.invalid".to_string(),
            kind: TransportErrorKind::Connect,
            message: "dns error".to_string(),
        }
    }

    #[test]
    fn test_failed_outcome_is_degenerate() {
        let outcome = failed();
        assert!(outcome.present().is_empty());
        assert!(outcome.missing().is_empty());
        assert_eq!(outcome.score(), 0);
        assert!(!outcome.is_persistable());
        assert!(outcome.as_result().is_none());
        assert_eq!(outcome.url(), "https://unreachable.invalid");
    }

    #[test]
    fn test_scored_outcome_with_zero_headers_is_persistable() {
        let outcome = CheckOutcome::Scored(CheckResult {
            url: "https://example.com".to_string(),
            present: PresentHeaders::new(),
            missing: vec!["Content-Security-Policy".to_string()],
            score: 0,
        });
        assert_eq!(outcome.score(), 0);
        assert!(outcome.is_persistable());
        assert_ne!(outcome, failed());
    }
}
