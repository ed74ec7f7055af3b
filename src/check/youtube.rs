//! YouTube Premium availability check.
//!
//! The Premium landing page embeds the viewer's resolved country as a
//! `"countryCode":"XX"` field in inline script data, and shows a fixed English
//! phrase when Premium is not sold there. When neither appears, a
//! China-only domain in the page or, failing that, an assumed `US` stands in.
//! That last step is a heuristic, not a guarantee.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::config::{
    YOUTUBE_CHINA_MARKER, YOUTUBE_CHINA_REGION, YOUTUBE_DEFAULT_REGION,
    YOUTUBE_NOT_AVAILABLE_MARKER, YOUTUBE_PREMIUM_URL,
};
use crate::fetch::{Fetcher, ProbeOutcome, ProbeRequest};

/// First `"countryCode":"..."` field in the page; non-greedy, single line.
/// Literal pattern, covered by `test_country_code_regex_compiles`.
static COUNTRY_CODE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""countryCode":"(.*?)""#).ok());

/// YouTube Premium classification. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Premium is offered.
    Available {
        /// Upper-cased region code
        region: String,
    },
    /// The page states Premium is not available in this country.
    NotAvailable,
    /// No 200 response was obtained.
    TransportFailure,
}

/// Where the Premium page lives.
#[derive(Debug, Clone)]
pub struct YouTubePremiumCheck {
    premium_url: String,
}

impl Default for YouTubePremiumCheck {
    fn default() -> Self {
        Self::new(YOUTUBE_PREMIUM_URL)
    }
}

impl YouTubePremiumCheck {
    /// Probes the given Premium landing page URL.
    pub fn new(premium_url: impl Into<String>) -> Self {
        Self {
            premium_url: premium_url.into(),
        }
    }

    /// Premium landing page URL.
    pub fn premium_url(&self) -> &str {
        &self.premium_url
    }

    /// Runs the check with a single probe. Never fails.
    pub async fn classify<F: Fetcher + ?Sized>(
        &self,
        fetcher: &F,
        user_agent: &str,
    ) -> Availability {
        let request = ProbeRequest::browser(self.premium_url.as_str(), user_agent);
        match fetcher.fetch(&request).await {
            ProbeOutcome::Transport(e) => {
                warn!("YouTube Premium check failed: {e}");
                Availability::TransportFailure
            }
            ProbeOutcome::Response(response) if response.status != 200 => {
                warn!(
                    "YouTube Premium check failed: unexpected status {}",
                    response.status
                );
                Availability::TransportFailure
            }
            ProbeOutcome::Response(response) => classify_premium_page(&response.body),
        }
    }
}

/// Classifies a Premium landing page body served with status 200.
///
/// The not-available phrase wins over any country signal in the same page.
pub fn classify_premium_page(body: &str) -> Availability {
    if body.contains(YOUTUBE_NOT_AVAILABLE_MARKER) {
        return Availability::NotAvailable;
    }

    let region = match COUNTRY_CODE_RE
        .as_ref()
        .and_then(|re| re.captures(body))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    {
        Some(code) => code.to_string(),
        None if body.contains(YOUTUBE_CHINA_MARKER) => YOUTUBE_CHINA_REGION.to_string(),
        None => {
            debug!("No country signal in Premium page, assuming {YOUTUBE_DEFAULT_REGION}");
            YOUTUBE_DEFAULT_REGION.to_string()
        }
    };

    Availability::Available {
        region: region.to_uppercase(),
    }
}
