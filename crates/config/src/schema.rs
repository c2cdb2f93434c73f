use batnotify_core::{NotifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `batnotify.toml`.
///
/// Every default matches the built-in popup, so an absent file changes
/// nothing.  The complete file, with the default values:
///
/// ```toml
/// [sources]
/// energy_now  = "/sys/class/power_supply/BAT0/energy_now"
/// energy_full = "/sys/class/power_supply/BAT0/energy_full"
/// ac_online   = "/sys/class/power_supply/AC/online"
///
/// [window]
/// title            = "battery_warnning_popup"
/// width            = 1000        # 1 ..= 2147483647
/// height           = 200         # 1 ..= 2147483647
/// border_thickness = 2           # at most min(width, height) / 2
/// poll_interval_ms = 1000        # at least 1
///
/// [theme]
/// background = "#0a0a0a"
/// border     = "#00ffff"
/// text       = "#00ffff"
/// font       = "JetBrains Mono SemiBold-36"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// sysfs files polled every tick.
    pub sources: SourcesConfig,
    /// Popup window geometry and timing.
    pub window: WindowConfig,
    /// Colours and font.
    pub theme: ThemeConfig,
}

/// Locations of the pseudo-files exposing battery energy and AC state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub energy_now:  PathBuf,
    pub energy_full: PathBuf,
    /// Contains `1` while external power is connected.
    pub ac_online:   PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            energy_now:  PathBuf::from("/sys/class/power_supply/BAT0/energy_now"),
            energy_full: PathBuf::from("/sys/class/power_supply/BAT0/energy_full"),
            ac_online:   PathBuf::from("/sys/class/power_supply/AC/online"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// `WM_NAME` of the popup; window-manager rules usually match on it.
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Border thickness in pixels, drawn as concentric 1px rectangles.
    pub border_thickness: u32,
    /// Delay between battery polls.
    pub poll_interval_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:            "battery_warnning_popup".to_string(),
            width:            1000,
            height:           200,
            border_thickness: 2,
            poll_interval_ms: 1_000,
        }
    }
}

/// Theme / styling configuration.
impl WindowConfig {
    /// Reject geometry and timing that X or the poll loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        let max = i32::MAX as u32;
        if !(1..=max).contains(&self.width) || !(1..=max).contains(&self.height) {
            return Err(NotifyError::Config(format!(
                "window size {}x{} must be between 1 and {max}",
                self.width, self.height
            )));
        }
        if self.border_thickness > self.width.min(self.height) / 2 {
            return Err(NotifyError::Config(format!(
                "border_thickness {} exceeds half the window's smaller side",
                self.border_thickness
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(NotifyError::Config("poll_interval_ms must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#0a0a0a"`).
    pub background: String,
    /// Border rectangle color.
    pub border: String,
    /// Warning text color.
    pub text: String,
    /// Xft font pattern, e.g. `"JetBrains Mono SemiBold-36"`.
    pub font: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            border:     "#00ffff".to_string(), // cyan
            text:       "#00ffff".to_string(),
            font:       "JetBrains Mono SemiBold-36".to_string(),
        }
    }
}
