//! HTTP client initialization.

use std::time::Duration;

use crate::config::{HTTP_TIMEOUT, USER_AGENT};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the check request.
///
/// Creates a `reqwest::Client` configured with:
/// - the 10 second request timeout (`HTTP_TIMEOUT`)
/// - a `header_audit/<version>` User-Agent
/// - reqwest's default redirect policy (up to 10 hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    build_client(HTTP_TIMEOUT)
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
