//! Probe request construction.

use crate::config::{HEADER_ACCEPT_LANGUAGE, HEADER_USER_AGENT, PROBE_ACCEPT_LANGUAGE};

/// A single outbound HTTP GET.
///
/// Immutable once built; constructed fresh for every probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Absolute URL to GET
    pub url: String,
    /// Request headers as (name, value) pairs, in send order
    pub headers: Vec<(String, String)>,
}

impl ProbeRequest {
    /// A bare GET with no extra headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// A GET carrying the browser header set both services expect.
    ///
    /// `Accept-Language: en` is mandatory: the YouTube not-available phrase is
    /// only matched against the English page.
    pub fn browser(url: impl Into<String>, user_agent: &str) -> Self {
        Self::get(url).with_headers([
            (HEADER_USER_AGENT, user_agent),
            (HEADER_ACCEPT_LANGUAGE, PROBE_ACCEPT_LANGUAGE),
        ])
    }

    /// Appends headers, keeping any already present.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Returns the first header value with the given name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Converts into a `reqwest::RequestBuilder` on the given client.
    pub(crate) fn apply_to(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        self.headers
            .iter()
            .fold(client.get(&self.url), |builder, (name, value)| {
                builder.header(name.as_str(), value.as_str())
            })
    }
}
