//! Streaming service unlock checks.
//!
//! Each check is a small sequential state machine over probe outcomes that
//! always terminates in exactly one classification. Checks never return
//! errors; failures are folded into their own `TransportFailure` variant.

mod netflix;
mod youtube;

pub use netflix::{extract_region, NetflixCheck, UnlockTier};
pub use youtube::{classify_premium_page, Availability, YouTubePremiumCheck};
