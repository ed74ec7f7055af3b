// Shared helpers for unit tests: an in-memory fetcher that replays canned
// outcomes per URL and records every request it receives.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error_handling::{ErrorType, ProbeError};
use crate::fetch::{Fetcher, ProbeOutcome, ProbeRequest};

#[derive(Default)]
pub(crate) struct ScriptedFetcher {
    outcomes: HashMap<String, ProbeOutcome>,
    panics_on: Vec<String>,
    delay: Option<Duration>,
    requests: Mutex<Vec<ProbeRequest>>,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(mut self, url: impl Into<String>, outcome: ProbeOutcome) -> Self {
        self.outcomes.insert(url.into(), outcome);
        self
    }

    pub(crate) fn on_transport_error(self, url: impl Into<String>) -> Self {
        self.on(
            url,
            ProbeError::new(ErrorType::HttpRequestConnectError, "connection refused").into(),
        )
    }

    /// Requests to `url` panic instead of returning.
    pub(crate) fn panic_on(mut self, url: impl Into<String>) -> Self {
        self.panics_on.push(url.into());
        self
    }

    /// Every request takes `delay` (tokio time, so pausable).
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ProbeRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub(crate) fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, request: &ProbeRequest) -> ProbeOutcome {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panics_on.contains(&request.url) {
            panic!("scripted panic for {}", request.url);
        }

        // Unscripted URLs behave like an unreachable host
        self.outcomes.get(&request.url).cloned().unwrap_or_else(|| {
            ProbeError::new(
                ErrorType::HttpRequestConnectError,
                format!("no script for {}", request.url),
            )
            .into()
        })
    }
}
