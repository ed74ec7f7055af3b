//! Configuration constants.
//!
//! This module defines the fixed probe endpoints, title identifiers, and
//! network defaults used by the unlock checks.

use std::time::Duration;

/// Base URL for Netflix title pages. The title identifier is appended directly.
pub const NETFLIX_TITLE_BASE_URL: &str = "https://www.netflix.com/title/";

/// A broadly licensed, non-original title.
///
/// Reachable only when the egress region unlocks the full local catalog.
pub const NETFLIX_FULL_CATALOG_TITLE_ID: &str = "81215567";

/// A Netflix original production, available in every region Netflix serves.
pub const NETFLIX_ORIGINALS_TITLE_ID: &str = "80018499";

/// Path segment Netflix uses in `x-originating-url` when no locale prefix is present.
pub const NETFLIX_UNPREFIXED_SEGMENT: &str = "title";

/// Region reported when the originating URL carries no locale prefix.
pub const NETFLIX_DEFAULT_REGION: &str = "us";

/// YouTube Premium landing page.
pub const YOUTUBE_PREMIUM_URL: &str = "https://www.youtube.com/premium";

/// Phrase served on the Premium page when the viewer's country is unsupported.
///
/// Only present in the English page body, which is why every probe sends
/// `Accept-Language: en`.
pub const YOUTUBE_NOT_AVAILABLE_MARKER: &str = "Premium is not available in your country";

/// Domain that only appears in Premium pages served to mainland China.
pub const YOUTUBE_CHINA_MARKER: &str = "www.google.cn";

/// Region assumed when the Premium page carries no country signal at all.
pub const YOUTUBE_DEFAULT_REGION: &str = "US";

/// Region reported when the China marker is observed.
pub const YOUTUBE_CHINA_REGION: &str = "CN";

/// Title of the emitted panel.
pub const DEFAULT_PANEL_TITLE: &str = "流媒体解锁检测";

/// Default User-Agent string for probes.
///
/// Netflix and YouTube both serve different pages to clients that do not look
/// like a desktop browser, so a realistic Chrome string is required.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4606.61 Safari/537.36";

/// Accept-Language value sent with every probe.
pub const PROBE_ACCEPT_LANGUAGE: &str = "en";

// Network operation timeouts
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Upper bound on the timeout a user may request, in seconds
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Maximum number of redirects the HTTP client follows per probe
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum error message length in characters.
///
/// Transport errors from reqwest can embed full URL chains; longer messages
/// are truncated before being logged.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;
