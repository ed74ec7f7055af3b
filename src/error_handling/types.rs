//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! `ErrorType` categories that probe failures are sorted into.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Timeout outside the accepted range.
    #[error("Invalid timeout {value}s: must be between 1 and {max} seconds")]
    InvalidTimeout {
        /// Requested timeout
        value: u64,
        /// Largest accepted timeout
        max: u64,
    },

    /// User-Agent is empty or whitespace.
    #[error("User-Agent must not be empty")]
    EmptyUserAgent,

    /// An endpoint option is not an absolute http(s) URL.
    #[error("Invalid --{option} '{value}': {reason}")]
    InvalidUrl {
        /// CLI option name
        option: &'static str,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors raised while handing the finished panel to a sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing the panel failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the panel failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// A probe that yielded no usable answer.
///
/// Either no response was obtained (a transport category) or the response
/// does not fit the check's state machine (a protocol category). Carries the
/// category for logging and a bounded, human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ProbeError {
    /// Failure category
    pub kind: ErrorType,
    /// Underlying error text, truncated
    pub message: String,
}

impl ProbeError {
    /// Creates a probe error of the given category.
    pub fn new(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: super::categorization::truncate_message(message.into()),
        }
    }
}

impl From<ReqwestError> for ProbeError {
    fn from(error: ReqwestError) -> Self {
        let kind = super::categorization::categorize_reqwest_error(&error);
        Self::new(kind, error.to_string())
    }
}

/// Categories of probe failure.
///
/// The first group covers transport failures (no response obtained). The rest
/// are protocol failures: a response arrived but does not fit the check's
/// state machine. Both collapse into the check's failure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Transport errors
    /// Request could not be built (bad URL or header)
    HttpRequestBuilderError,
    /// Redirect loop or too many hops
    HttpRequestRedirectError,
    /// Client timeout elapsed
    HttpRequestTimeoutError,
    /// TCP/TLS connection failed
    HttpRequestConnectError,
    /// Request failed while being sent
    HttpRequestRequestError,
    /// Response body could not be read
    HttpRequestBodyError,
    /// Response body could not be decoded
    HttpRequestDecodeError,
    /// Anything else reqwest reports
    HttpRequestOtherError,
    // Protocol errors
    /// Status code outside the check's state machine
    UnexpectedStatus,
    /// 200 without `x-originating-url`
    MissingRegionHeader,
    /// `x-originating-url` too short to hold a locale segment
    MalformedRegionHeader,
    /// The check itself panicked
    CheckPanicked,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable description of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::UnexpectedStatus => "Unexpected HTTP status",
            ErrorType::MissingRegionHeader => "Missing x-originating-url header",
            ErrorType::MalformedRegionHeader => "Malformed x-originating-url header",
            ErrorType::CheckPanicked => "Check panicked",
        }
    }

    /// True when no HTTP response was obtained at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorType::HttpRequestBuilderError
                | ErrorType::HttpRequestRedirectError
                | ErrorType::HttpRequestTimeoutError
                | ErrorType::HttpRequestConnectError
                | ErrorType::HttpRequestRequestError
                | ErrorType::HttpRequestBodyError
                | ErrorType::HttpRequestDecodeError
                | ErrorType::HttpRequestOtherError
        )
    }
}
