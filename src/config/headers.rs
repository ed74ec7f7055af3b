//! HTTP header name constants.
//!
//! Header names used when building probes and when reading probe responses.
//! Lookups go through `reqwest::header::HeaderMap`, so case does not matter.

/// Response header revealing the locale-resolved URL Netflix actually served.
pub const HEADER_X_ORIGINATING_URL: &str = "x-originating-url";

// Request headers
/// User-Agent request header
pub const HEADER_USER_AGENT: &str = "User-Agent";
/// Accept-Language request header
pub const HEADER_ACCEPT_LANGUAGE: &str = "Accept-Language";

