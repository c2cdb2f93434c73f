pub mod schema;

pub use schema::{PopupConfig, SourcesConfig, ThemeConfig, WindowConfig};

use batnotify_core::{NotifyError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `PopupConfig::default()` if
/// the file doesn't exist so the popup always has the built-in behaviour.
pub fn load(path: impl AsRef<Path>) -> Result<PopupConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(PopupConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| NotifyError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: PopupConfig = toml::from_str(&raw)
        .map_err(|e| NotifyError::Config(format!("TOML parse error: {e}")))?;
    config.window.validate()?;

    tracing::info!("Config loaded from '{}'", path.display());
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("batnotify").join("batnotify.toml")
}
