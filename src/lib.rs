//! stream_unlock library: streaming catalog unlock checks
//!
//! Determines, from the current network egress, whether Netflix serves its
//! full local catalog, only its original productions, or nothing at all, and
//! whether YouTube Premium is offered, together with the region each service
//! resolved to. Both checks run concurrently and are rendered into a short
//! two-line panel.
//!
//! # Example
//!
//! ```no_run
//! use stream_unlock::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     timeout_seconds: 5,
//!     ..Default::default()
//! };
//!
//! let panel = run_check(&config).await?;
//! println!("{}\n{}", panel.title, panel.content);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod check;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod report;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use check::{Availability, NetflixCheck, UnlockTier, YouTubePremiumCheck};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use fetch::{Fetcher, HttpFetcher, ProbeOutcome, ProbeRequest, ProbeResponse};
pub use report::{build_report, PanelReport, Report, ReportSink, StatusLine, WriterSink};
pub use run::run_check;

// Internal run module (wires configuration, client and checks together)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::check::{NetflixCheck, YouTubePremiumCheck};
    use crate::config::Config;
    use crate::fetch::HttpFetcher;
    use crate::initialization::init_client;
    use crate::report::{build_report, PanelReport};

    /// Runs both unlock checks with the provided configuration.
    ///
    /// This is the main entry point for the library. Individual check
    /// failures do not make this function fail: they are rendered into the
    /// panel as a failed-check line.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The HTTP client cannot be initialized
    pub async fn run_check(config: &Config) -> Result<PanelReport> {
        config.validate().context("Invalid configuration")?;

        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let fetcher = HttpFetcher::new(client);
        let netflix = NetflixCheck::new(config.netflix_base_url.as_str());
        let youtube = YouTubePremiumCheck::new(config.youtube_premium_url.as_str());

        let start = Instant::now();
        let report = build_report(&fetcher, &netflix, &youtube, &config.user_agent).await;
        info!(
            "Unlock checks finished in {:.2}s",
            start.elapsed().as_secs_f64()
        );

        Ok(report.into_panel(config.title.as_str()))
    }
}
