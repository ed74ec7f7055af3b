//! HTTP probing.
//!
//! Checks never talk to `reqwest` directly; they go through the [`Fetcher`]
//! seam so their state machines can be driven by scripted outcomes in tests
//! and by a real client in production.

mod request;
mod response;


use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::debug;

use crate::error_handling::ProbeError;

pub use request::ProbeRequest;
pub use response::{ProbeOutcome, ProbeResponse};

/// HTTP GET capability consumed by the checks.
///
/// Implementations must never fail: every failure is reported as
/// `ProbeOutcome::Transport`. Any timeout policy belongs to the implementation.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs one GET and returns its outcome.
    async fn fetch(&self, request: &ProbeRequest) -> ProbeOutcome;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, request: &ProbeRequest) -> ProbeOutcome {
        (**self).fetch(request).await
    }
}

/// [`Fetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Wraps an already configured client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let response = request.apply_to(&self.client).send().await?;
        let status = response.status().as_u16();
        // Headers must be taken before text() consumes the response
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(ProbeResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &ProbeRequest) -> ProbeOutcome {
        let start = Instant::now();
        debug!("Probing {}", request.url);

        match self.send(request).await {
            Ok(response) => {
                debug!(
                    "Probe {} returned {} in {:.2}s ({} body bytes)",
                    request.url,
                    response.status,
                    start.elapsed().as_secs_f64(),
                    response.body.len()
                );
                ProbeOutcome::Response(response)
            }
            Err(e) => {
                debug!(
                    "Probe {} failed after {:.2}s: {}",
                    request.url,
                    start.elapsed().as_secs_f64(),
                    e
                );
                ProbeOutcome::Transport(e)
            }
        }
    }
}
