//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by every probe.
///
/// Creates a `reqwest::Client` configured with:
/// - Total timeout from config, plus a fixed TCP connect timeout
/// - Redirect following, bounded to `MAX_REDIRECT_HOPS`
/// - User-Agent from config (probes set it again explicitly per request)
///
/// Redirects are followed because Netflix answers a licensed title with a
/// locale redirect; the final response still carries `x-originating-url`.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
