//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_PANEL_TITLE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS,
    NETFLIX_TITLE_BASE_URL, YOUTUBE_PREMIUM_URL,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the final panel is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Title line followed by one status line per service
    Text,
    /// A single `{"title": ..., "content": ...}` object
    Json,
}

/// Checker configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// with `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use stream_unlock::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stream_unlock",
    version,
    about = "Checks Netflix and YouTube Premium unlock status from this network"
)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, env = "STREAM_UNLOCK_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "STREAM_UNLOCK_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "STREAM_UNLOCK_OUTPUT")]
    pub output: OutputFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "STREAM_UNLOCK_TIMEOUT_SECONDS")]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "STREAM_UNLOCK_USER_AGENT")]
    pub user_agent: String,

    /// Panel title
    #[arg(long, default_value = DEFAULT_PANEL_TITLE, env = "STREAM_UNLOCK_TITLE")]
    pub title: String,

    /// Base URL that Netflix title identifiers are appended to
    #[arg(long, default_value = NETFLIX_TITLE_BASE_URL, env = "STREAM_UNLOCK_NETFLIX_BASE_URL")]
    pub netflix_base_url: String,

    /// YouTube Premium landing page URL
    #[arg(long, default_value = YOUTUBE_PREMIUM_URL, env = "STREAM_UNLOCK_YOUTUBE_PREMIUM_URL")]
    pub youtube_premium_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output: OutputFormat::Text,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            title: DEFAULT_PANEL_TITLE.to_string(),
            netflix_base_url: NETFLIX_TITLE_BASE_URL.to_string(),
            youtube_premium_url: YOUTUBE_PREMIUM_URL.to_string(),
        }
    }
}

impl Config {
    /// Validates option values before any network resource is created.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout_seconds,
                max: MAX_TIMEOUT_SECS,
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        validate_http_url("netflix-base-url", &self.netflix_base_url)?;
        validate_http_url("youtube-premium-url", &self.youtube_premium_url)?;
        Ok(())
    }
}

fn validate_http_url(option: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        option,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            option,
            value: value.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
