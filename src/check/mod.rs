//! Security header check.
//!
//! Issues one GET request against the target and evaluates the response
//! headers against the required set. HTTP status codes do not matter: a 404
//! or 500 response is evaluated like any other. Only transport failures
//! (DNS, connect, timeout, invalid URL) produce [`CheckOutcome::Failed`].

mod evaluate;
mod types;

use log::{debug, error};

use crate::app::{normalize_url, parse_target};
use crate::error_handling::{categorize_transport_error, TransportErrorKind};

pub use evaluate::{compute_score, evaluate_headers};
pub use types::{CheckOutcome, CheckResult, PresentHeaders};

/// Checks `url` for the required security headers.
///
/// The URL is normalized first (`https://` is assumed when no scheme is
/// given). Failures are logged and returned as [`CheckOutcome::Failed`];
/// this function never returns an error.
pub async fn check_security_headers(client: &reqwest::Client, url: &str) -> CheckOutcome {
    let normalized = normalize_url(url);

    let target = match parse_target(&normalized) {
        Ok(target) => target,
        Err(e) => {
            error!("Error checking {normalized}: invalid URL: {e}");
            return CheckOutcome::Failed {
                url: normalized,
                kind: TransportErrorKind::Builder,
                message: e.to_string(),
            };
        }
    };

    let response = match client.get(target).send().await {
        Ok(response) => response,
        Err(e) => {
            let kind = categorize_transport_error(&e);
            error!("Error checking {normalized}: {kind}: {e}");
            return CheckOutcome::Failed {
                url: normalized,
                kind,
                message: e.to_string(),
            };
        }
    };

    debug!(
        "Received {} from {} ({} headers)",
        response.status(),
        response.url(),
        response.headers().len()
    );

    let (present, missing) = evaluate_headers(response.headers());
    let score = compute_score(present.len());

    CheckOutcome::Scored(CheckResult {
        url: normalized,
        present,
        missing,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::init_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_check_scores_partial_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Strict-Transport-Security", "max-age=63072000")
                    .insert_header("X-Content-Type-Options", "nosniff")
                    .insert_header("Referrer-Policy", "no-referrer"),
            )
            .mount(&server)
            .await;

        let client = init_client().unwrap();
        let outcome = check_security_headers(&client, &server.uri()).await;
        let result = outcome.as_result().expect("response was obtained");

        assert_eq!(result.score, 42);
        assert_eq!(result.present.len(), 3);
        assert_eq!(result.missing.len(), 4);
        assert_eq!(result.present["X-Content-Type-Options"], "nosniff");
        assert_eq!(result.url, server.uri());
    }

    #[tokio::test]
    async fn test_check_error_status_is_still_scored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).insert_header("X-Frame-Options", "DENY"))
            .mount(&server)
            .await;

        let client = init_client().unwrap();
        let outcome = check_security_headers(&client, &server.uri()).await;
        assert!(matches!(outcome, CheckOutcome::Scored(_)));
        assert_eq!(outcome.score(), 14);
    }

    #[tokio::test]
    async fn test_check_invalid_url_fails() {
        let client = init_client().unwrap();
        let outcome = check_security_headers(&client, "not a valid url!!!").await;
        match outcome {
            CheckOutcome::Failed { url, kind, .. } => {
                assert_eq!(url, "https://not a valid url!!!");
                assert_eq!(kind, TransportErrorKind::Builder);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
