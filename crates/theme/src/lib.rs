pub mod colors;

pub use colors::Color;

use batnotify_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to the built-in palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub border:     Color,
    pub text:       Color,
    /// Xft font pattern.
    pub font:       String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: parse_or(&cfg.background, Color::NEAR_BLACK),
            border:     parse_or(&cfg.border, Color::CYAN),
            text:       parse_or(&cfg.text, Color::CYAN),
            font:       cfg.font.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn parse_or(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("Invalid colour '{hex}'; using default.");
        fallback
    })
}
