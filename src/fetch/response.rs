//! Probe outcome types.

use reqwest::header::HeaderMap;

use crate::error_handling::ProbeError;

/// An HTTP response as seen by a check.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// Final status code, after redirects
    pub status: u16,
    /// Final response headers; lookups are case-insensitive
    pub headers: HeaderMap,
    /// Response body decoded as text
    pub body: String,
}

impl ProbeResponse {
    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Result of one HTTP attempt.
///
/// Exactly one of the two shapes: either a transport failure (no response
/// was obtained) or a complete response.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// Network, DNS, TLS, timeout or body-read failure
    Transport(ProbeError),
    /// A full response with status, headers and body
    Response(ProbeResponse),
}

impl ProbeOutcome {
    /// Status code, or `None` on transport failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Response(r) => Some(r.status),
            ProbeOutcome::Transport(_) => None,
        }
    }

    /// Header lookup; always `None` on transport failure.
    pub fn header(&self, name: &str) -> Option<&str> {
        match self {
            ProbeOutcome::Response(r) => r.header(name),
            ProbeOutcome::Transport(_) => None,
        }
    }

    /// Body text, or `None` on transport failure.
    pub fn body(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Response(r) => Some(r.body.as_str()),
            ProbeOutcome::Transport(_) => None,
        }
    }

    /// Builds a response outcome from plain parts.
    ///
    /// Header pairs that are not valid HTTP names or values are skipped.
    pub fn response<'a>(
        status: u16,
        headers: impl IntoIterator<Item = (&'a str, &'a str)>,
        body: impl Into<String>,
    ) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            if let (Ok(name), Ok(value)) = (
                reqwest::header::HeaderName::from_bytes(name.as_bytes()),
                reqwest::header::HeaderValue::from_str(value),
            ) {
                map.append(name, value);
            }
        }
        ProbeOutcome::Response(ProbeResponse {
            status,
            headers: map,
            body: body.into(),
        })
    }
}

impl From<ProbeError> for ProbeOutcome {
    fn from(error: ProbeError) -> Self {
        ProbeOutcome::Transport(error)
    }
}
