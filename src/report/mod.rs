//! Report assembly.
//!
//! Runs both service checks concurrently, renders one status line per
//! service and joins them into the panel body. The report always holds
//! exactly two lines, Netflix first, whatever the individual outcomes.

mod render;
mod sink;

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use log::{debug, error};
use serde::Serialize;

use crate::check::{Availability, NetflixCheck, UnlockTier, YouTubePremiumCheck};
use crate::error_handling::ErrorType;
use crate::fetch::Fetcher;

pub use render::{render_netflix, render_youtube, NETFLIX_LABEL, YOUTUBE_LABEL};
pub use sink::{ReportSink, WriterSink};

/// One rendered service line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Service name
    pub label: String,
    /// Full line text, label included
    pub rendered: String,
}

impl StatusLine {
    /// Builds `"{label}：{status}"`.
    pub fn new(label: &str, status: impl AsRef<str>) -> Self {
        Self {
            label: label.to_string(),
            rendered: format!("{}：{}", label, status.as_ref()),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Ordered status lines of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Lines in emission order
    pub lines: Vec<StatusLine>,
}

impl Report {
    /// Lines joined by `\n`.
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.rendered.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Wraps the content into the emitted panel object.
    pub fn into_panel(self, title: impl Into<String>) -> PanelReport {
        PanelReport {
            title: title.into(),
            content: self.content(),
        }
    }
}

/// The object handed to the panel renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelReport {
    /// Panel title
    pub title: String,
    /// Joined status lines
    pub content: String,
}

/// Runs both checks concurrently and renders the report.
///
/// Waits for both checks to finish; neither can cancel or short-circuit the
/// other. A check that panics is reported as failed rather than tearing down
/// the report.
pub async fn build_report<F: Fetcher + ?Sized>(
    fetcher: &F,
    netflix: &NetflixCheck,
    youtube: &YouTubePremiumCheck,
    user_agent: &str,
) -> Report {
    let (tier, availability) = tokio::join!(
        contained(
            NETFLIX_LABEL,
            netflix.classify(fetcher, user_agent),
            UnlockTier::TransportFailure,
        ),
        contained(
            YOUTUBE_LABEL,
            youtube.classify(fetcher, user_agent),
            Availability::TransportFailure,
        ),
    );
    debug!("Netflix: {tier:?}, YouTube: {availability:?}");

    Report {
        lines: vec![render_netflix(&tier), render_youtube(&availability)],
    }
}

/// Runs one check inside its own panic boundary.
async fn contained<T>(service: &str, check: impl Future<Output = T>, on_panic: T) -> T {
    match AssertUnwindSafe(check).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(_) => {
            error!(
                "{service} check failed: {}, reporting as failed",
                ErrorType::CheckPanicked
            );
            on_panic
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{NETFLIX_FULL_CATALOG_TITLE_ID, NETFLIX_ORIGINALS_TITLE_ID};
    use crate::fetch::ProbeOutcome;
    use crate::test_support::ScriptedFetcher;

    const UA: &str = "test-agent/1.0";
    const NETFLIX_BASE: &str = "https://nf.test/title/";
    const YOUTUBE_URL: &str = "https://yt.test/premium";

    fn netflix_full_url() -> String {
        format!("{NETFLIX_BASE}{NETFLIX_FULL_CATALOG_TITLE_ID}")
    }

    fn netflix_originals_url() -> String {
        format!("{NETFLIX_BASE}{NETFLIX_ORIGINALS_TITLE_ID}")
    }

    fn status(code: u16) -> ProbeOutcome {
        ProbeOutcome::response(code, Vec::<(&str, &str)>::new(), "")
    }

    fn netflix_ok() -> ProbeOutcome {
        ProbeOutcome::response(
            200,
            [("x-originating-url", "https://www.netflix.com/title/81215567")],
            "",
        )
    }

    fn youtube_ok() -> ProbeOutcome {
        ProbeOutcome::response(200, Vec::<(&str, &str)>::new(), r#"{"countryCode":"jp"}"#)
    }

    async fn report_for(fetcher: &ScriptedFetcher) -> Report {
        build_report(
            fetcher,
            &NetflixCheck::new(NETFLIX_BASE),
            &YouTubePremiumCheck::new(YOUTUBE_URL),
            UA,
        )
        .await
    }

    #[test]
    fn test_status_line_display() {
        let line = StatusLine::new("Netflix", "🔴 不支持解锁");
        assert_eq!(line.to_string(), "Netflix：🔴 不支持解锁");
    }

    #[test]
    fn test_panel_from_report() {
        let report = Report {
            lines: vec![
                StatusLine::new("Netflix", "a"),
                StatusLine::new("YouTube", "b"),
            ],
        };
        let panel = report.into_panel("流媒体解锁检测");
        assert_eq!(panel.title, "流媒体解锁检测");
        assert_eq!(panel.content, "Netflix：a\nYouTube：b");
    }

    #[tokio::test]
    async fn test_both_succeed() {
        let fetcher = ScriptedFetcher::new()
            .on(netflix_full_url(), netflix_ok())
            .on(YOUTUBE_URL, youtube_ok());

        let report = report_for(&fetcher).await;

        assert_eq!(
            report.content(),
            "Netflix：🟢 完整解锁，区域：US\nYouTube：🟢 解锁 Premium，区域：JP"
        );
    }

    #[tokio::test]
    async fn test_netflix_fails_youtube_succeeds() {
        let fetcher = ScriptedFetcher::new()
            .on_transport_error(netflix_full_url())
            .on(YOUTUBE_URL, youtube_ok());

        let report = report_for(&fetcher).await;

        assert_eq!(
            report.content(),
            "Netflix：⚠️ 检测失败，请刷新面板\nYouTube：🟢 解锁 Premium，区域：JP"
        );
    }

    #[tokio::test]
    async fn test_netflix_succeeds_youtube_fails() {
        let fetcher = ScriptedFetcher::new()
            .on(netflix_full_url(), status(404))
            .on(
                netflix_originals_url(),
                ProbeOutcome::response(
                    200,
                    [("x-originating-url", "https://www.netflix.com/de-81215567")],
                    "",
                ),
            )
            .on_transport_error(YOUTUBE_URL);

        let report = report_for(&fetcher).await;

        assert_eq!(
            report.content(),
            "Netflix：🟡 仅解锁自制剧，区域：DE\nYouTube：⚠️ 检测失败，请刷新面板"
        );
    }

    #[tokio::test]
    async fn test_both_fail() {
        let fetcher = ScriptedFetcher::new()
            .on(netflix_full_url(), status(500))
            .on(YOUTUBE_URL, status(503));

        let report = report_for(&fetcher).await;

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].label, "Netflix");
        assert_eq!(report.lines[1].label, "YouTube");
        assert_eq!(
            report.content(),
            "Netflix：⚠️ 检测失败，请刷新面板\nYouTube：⚠️ 检测失败，请刷新面板"
        );
    }

    #[tokio::test]
    async fn test_not_available_lines() {
        let fetcher = ScriptedFetcher::new()
            .on(netflix_full_url(), status(403))
            .on(
                YOUTUBE_URL,
                ProbeOutcome::response(
                    200,
                    Vec::<(&str, &str)>::new(),
                    "Premium is not available in your country",
                ),
            );

        let report = report_for(&fetcher).await;

        assert_eq!(
            report.content(),
            "Netflix：🔴 不支持解锁\nYouTube：🔴 不支持解锁 Premium"
        );
        // 403 is terminal: one Netflix probe plus one YouTube probe
        assert_eq!(fetcher.request_count(), 2);
    }

    #[tokio::test]
    async fn test_panicking_check_does_not_affect_the_other() {
        let fetcher = ScriptedFetcher::new()
            .panic_on(netflix_full_url())
            .on(YOUTUBE_URL, youtube_ok());

        let report = report_for(&fetcher).await;

        assert_eq!(
            report.content(),
            "Netflix：⚠️ 检测失败，请刷新面板\nYouTube：🟢 解锁 Premium，区域：JP"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_checks_run_concurrently() {
        // Netflix needs two sequential probes, YouTube one; run concurrently
        // the whole report takes two probe delays, not three.
        let delay = Duration::from_millis(500);
        let fetcher = ScriptedFetcher::new()
            .with_delay(delay)
            .on(netflix_full_url(), status(404))
            .on(netflix_originals_url(), status(404))
            .on(YOUTUBE_URL, youtube_ok());

        let start = tokio::time::Instant::now();
        let report = report_for(&fetcher).await;
        let elapsed = start.elapsed();

        assert_eq!(report.lines.len(), 2);
        assert!(elapsed >= delay * 2, "elapsed {elapsed:?}");
        assert!(elapsed < delay * 3, "elapsed {elapsed:?}");
    }

    #[tokio::test]
    async fn test_netflix_second_probe_only_after_first() {
        let fetcher = ScriptedFetcher::new()
            .on(netflix_full_url(), status(404))
            .on(netflix_originals_url(), status(404))
            .on(YOUTUBE_URL, youtube_ok());

        report_for(&fetcher).await;

        let netflix_urls: Vec<String> = fetcher
            .requested_urls()
            .into_iter()
            .filter(|url| url.starts_with(NETFLIX_BASE))
            .collect();
        assert_eq!(netflix_urls, vec![netflix_full_url(), netflix_originals_url()]);
    }
}
