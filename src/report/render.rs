//! Status line rendering.
//!
//! The rendered text is the user-facing contract of the panel and must not
//! change wording.

use crate::check::{Availability, UnlockTier};

use super::StatusLine;

/// Label of the Netflix line.
pub const NETFLIX_LABEL: &str = "Netflix";
/// Label of the YouTube line.
pub const YOUTUBE_LABEL: &str = "YouTube";

/// Renders the Netflix outcome.
pub fn render_netflix(tier: &UnlockTier) -> StatusLine {
    let status = match tier {
        UnlockTier::FullUnlock { region } => {
            format!("🟢 完整解锁，区域：{}", region.to_uppercase())
        }
        UnlockTier::OriginalsOnly { region } => {
            format!("🟡 仅解锁自制剧，区域：{}", region.to_uppercase())
        }
        UnlockTier::NotAvailable => "🔴 不支持解锁".to_string(),
        UnlockTier::TransportFailure => "⚠️ 检测失败，请刷新面板".to_string(),
    };
    StatusLine::new(NETFLIX_LABEL, status)
}

/// Renders the YouTube Premium outcome.
pub fn render_youtube(availability: &Availability) -> StatusLine {
    let status = match availability {
        Availability::Available { region } => {
            format!("🟢 解锁 Premium，区域：{}", region.to_uppercase())
        }
        Availability::NotAvailable => "🔴 不支持解锁 Premium".to_string(),
        Availability::TransportFailure => "⚠️ 检测失败，请刷新面板".to_string(),
    };
    StatusLine::new(YOUTUBE_LABEL, status)
}
