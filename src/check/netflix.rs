//! Netflix catalog unlock check.
//!
//! Netflix answers a title page in one of three ways depending on where the
//! request comes from:
//! - 200, with `x-originating-url` revealing the locale it resolved to, when
//!   the title is licensed in that region;
//! - 404 when the title is not licensed there but the service is reachable;
//! - 403 when the whole region is blocked.
//!
//! Probing one licensed title and, if that is missing, one Netflix original
//! separates full catalog access from originals-only access in at most two
//! requests.

use log::{debug, warn};

use crate::config::{
    HEADER_X_ORIGINATING_URL, NETFLIX_DEFAULT_REGION, NETFLIX_FULL_CATALOG_TITLE_ID,
    NETFLIX_ORIGINALS_TITLE_ID, NETFLIX_TITLE_BASE_URL, NETFLIX_UNPREFIXED_SEGMENT,
};
use crate::error_handling::{ErrorType, ProbeError};
use crate::fetch::{Fetcher, ProbeOutcome, ProbeRequest};

/// Netflix unlock classification. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockTier {
    /// The licensed title is served: full local catalog.
    FullUnlock {
        /// Upper-cased region code
        region: String,
    },
    /// Only Netflix originals are served.
    OriginalsOnly {
        /// Upper-cased region code
        region: String,
    },
    /// Netflix is blocked or serves nothing from this egress.
    NotAvailable,
    /// No interpretable answer was obtained.
    TransportFailure,
}

/// How a single title probe resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TitleProbe {
    /// 200: title served in the given (upper-cased) region
    Served(String),
    /// 404
    NotFound,
    /// 403
    Blocked,
}

/// Netflix check configuration: where to probe and which titles to ask for.
#[derive(Debug, Clone)]
pub struct NetflixCheck {
    title_base_url: String,
    full_catalog_title_id: String,
    originals_title_id: String,
}

impl Default for NetflixCheck {
    fn default() -> Self {
        Self::new(NETFLIX_TITLE_BASE_URL)
    }
}

impl NetflixCheck {
    /// Probes the standard title pair under `title_base_url`.
    pub fn new(title_base_url: impl Into<String>) -> Self {
        Self {
            title_base_url: title_base_url.into(),
            full_catalog_title_id: NETFLIX_FULL_CATALOG_TITLE_ID.to_string(),
            originals_title_id: NETFLIX_ORIGINALS_TITLE_ID.to_string(),
        }
    }

    /// Overrides the two title identifiers.
    pub fn with_titles(
        mut self,
        full_catalog_title_id: impl Into<String>,
        originals_title_id: impl Into<String>,
    ) -> Self {
        self.full_catalog_title_id = full_catalog_title_id.into();
        self.originals_title_id = originals_title_id.into();
        self
    }

    /// URL of the title page for `title_id`.
    pub fn title_url(&self, title_id: &str) -> String {
        format!("{}{}", self.title_base_url, title_id)
    }

    /// Runs the check. Never fails; every failure becomes `TransportFailure`.
    ///
    /// The originals probe is only issued after the licensed-title probe
    /// returned 404.
    pub async fn classify<F: Fetcher + ?Sized>(&self, fetcher: &F, user_agent: &str) -> UnlockTier {
        let full = self
            .probe_title(fetcher, &self.full_catalog_title_id, user_agent)
            .await;
        match full {
            Ok(TitleProbe::Served(region)) => return UnlockTier::FullUnlock { region },
            Ok(TitleProbe::Blocked) => return UnlockTier::NotAvailable,
            Ok(TitleProbe::NotFound) => {
                debug!(
                    "Netflix title {} not found, trying original {}",
                    self.full_catalog_title_id, self.originals_title_id
                );
            }
            Err(e) => {
                warn!("Netflix check failed on licensed title: {e}");
                return UnlockTier::TransportFailure;
            }
        }

        let originals = self
            .probe_title(fetcher, &self.originals_title_id, user_agent)
            .await;
        match originals {
            Ok(TitleProbe::Served(region)) => UnlockTier::OriginalsOnly { region },
            Ok(TitleProbe::NotFound) => UnlockTier::NotAvailable,
            Ok(TitleProbe::Blocked) => {
                warn!("Netflix check failed: original title returned 403 after licensed title returned 404");
                UnlockTier::TransportFailure
            }
            Err(e) => {
                warn!("Netflix check failed on original title: {e}");
                UnlockTier::TransportFailure
            }
        }
    }

    async fn probe_title<F: Fetcher + ?Sized>(
        &self,
        fetcher: &F,
        title_id: &str,
        user_agent: &str,
    ) -> Result<TitleProbe, ProbeError> {
        let request = ProbeRequest::browser(self.title_url(title_id), user_agent);
        let outcome = fetcher.fetch(&request).await;
        interpret_title_outcome(&outcome)
    }
}

fn interpret_title_outcome(outcome: &ProbeOutcome) -> Result<TitleProbe, ProbeError> {
    let response = match outcome {
        ProbeOutcome::Transport(e) => return Err(e.clone()),
        ProbeOutcome::Response(response) => response,
    };
    match response.status {
        200 => {
            let originating_url = response.header(HEADER_X_ORIGINATING_URL).ok_or_else(|| {
                ProbeError::new(
                    ErrorType::MissingRegionHeader,
                    "200 response without x-originating-url",
                )
            })?;
            let region = extract_region(originating_url).ok_or_else(|| {
                ProbeError::new(ErrorType::MalformedRegionHeader, originating_url)
            })?;
            Ok(TitleProbe::Served(region))
        }
        403 => Ok(TitleProbe::Blocked),
        404 => Ok(TitleProbe::NotFound),
        other => Err(ProbeError::new(
            ErrorType::UnexpectedStatus,
            format!("status {other}"),
        )),
    }
}

/// Extracts the upper-cased region code from an `x-originating-url` value.
///
/// Takes the fourth `/`-separated segment (the first path segment of an
/// absolute URL) and keeps what precedes its first `-`. A bare `title`
/// segment means no locale prefix, i.e. the US catalog.
///
/// Returns `None` only when the URL has no such segment. An empty token comes
/// back as an empty region.
pub fn extract_region(originating_url: &str) -> Option<String> {
    let segment = originating_url.split('/').nth(3)?;
    let token = segment.split('-').next()?;
    let region = if token == NETFLIX_UNPREFIXED_SEGMENT {
        NETFLIX_DEFAULT_REGION
    } else {
        token
    };
    Some(region.to_uppercase())
}
