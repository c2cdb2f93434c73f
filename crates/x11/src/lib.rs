//! X11 popup window for `batnotify`.
//!
//! Owns the display connection and every drawing handle, and drives the
//! shared poll/paint loop against them until AC power returns.

mod surface;

pub use surface::XPopup;

use batnotify_config::PopupConfig;
use batnotify_core::Result;
use batnotify_renderer::{run_popup, Geometry, PopupSummary};
use batnotify_system::PowerSupply;
use batnotify_theme::Theme;
use std::time::Duration;
use tracing::info;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the popup and keep it up until the AC adapter is plugged in.
///
/// Fails only if the display or the font cannot be acquired; in that case
/// everything opened so far has already been released.
pub async fn run(config: &PopupConfig) -> Result<PopupSummary> {
    let theme    = Theme::from_config(&config.theme);
    let geometry = Geometry::from_config(&config.window);
    let supply   = PowerSupply::from_config(&config.sources);
    let interval = Duration::from_millis(config.window.poll_interval_ms);

    let mut popup = XPopup::open(&config.window, &theme)?;
    info!(
        "Popup opened ({}x{}, font '{}')",
        geometry.width, geometry.height, theme.font
    );

    let summary = run_popup(&mut popup, &supply, geometry, interval).await;

    drop(popup);
    info!("Popup resources released");

    Ok(summary)
}
