//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, configuration and report sinks
//! - `ProbeError` and the `ErrorType` categories probe failures fall into
//! - Error categorization for `reqwest` failures
//!
//! Probe failures are values, never propagated errors: each check converts
//! them into its own failure variant at its boundary.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, truncate_message};
pub use types::{ConfigError, ErrorType, InitializationError, ProbeError, SinkError};
