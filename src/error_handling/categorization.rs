//! Error categorization.
//!
//! This module maps `reqwest` failures onto `ErrorType` categories and bounds
//! the length of error text before it reaches the logs.

use super::types::ErrorType;
use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Probes never call `error_for_status()`, so status codes are interpreted by
/// the checks themselves and only connection-level kinds are inspected here.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncation happens on a character boundary and notes the original length.
pub fn truncate_message(message: String) -> String {
    let char_count = message.chars().count();
    if char_count <= MAX_ERROR_MESSAGE_LENGTH {
        return message;
    }
    let truncated: String = message.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect();
    format!("{truncated}... (truncated, {char_count} chars)")
}
