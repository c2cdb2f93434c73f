use batnotify_config::SourcesConfig;
use batnotify_core::{BatteryReading, PowerSource};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The three sysfs files the popup polls.
///
/// Every call re-reads the files; nothing is cached between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerSupply {
    pub energy_now:  PathBuf,
    pub energy_full: PathBuf,
    pub ac_online:   PathBuf,
}

impl Default for PowerSupply {
    fn default() -> Self {
        Self::from_config(&SourcesConfig::default())
    }
}

impl PowerSupply {
    pub fn from_config(cfg: &SourcesConfig) -> Self {
        Self {
            energy_now:  cfg.energy_now.clone(),
            energy_full: cfg.energy_full.clone(),
            ac_online:   cfg.ac_online.clone(),
        }
    }

    /// Read both energy files and derive a charge reading.
    ///
    /// Any unreadable or non-numeric file yields [`BatteryReading::invalid`].
    pub fn reading(&self) -> BatteryReading {
        let now  = read_number::<f64>(&self.energy_now);
        let full = read_number::<f64>(&self.energy_full);

        match (now, full) {
            (Some(now), Some(full)) => BatteryReading::from_energy(now, full),
            _ => {
                tracing::debug!(
                    "Battery read failed ({} / {})",
                    self.energy_now.display(),
                    self.energy_full.display()
                );
                BatteryReading::invalid()
            }
        }
    }

    /// Warning text for the current charge, or the error string.
    pub fn read_percentage(&self) -> String {
        self.reading().message()
    }

    /// `true` only when the AC flag parses to exactly `1`.  A missing or
    /// garbled file counts as unplugged so the warning stays up.
    pub fn is_ac_online(&self) -> bool {
        read_number::<i64>(&self.ac_online) == Some(1)
    }
}

impl PowerSource for PowerSupply {
    fn reading(&self) -> BatteryReading {
        PowerSupply::reading(self)
    }

    fn ac_online(&self) -> bool {
        self.is_ac_online()
    }
}

/// [`PowerSupply::read_percentage`] on the default `BAT0` paths.
pub fn read_percentage() -> String {
    PowerSupply::default().read_percentage()
}

/// [`PowerSupply::is_ac_online`] on the default `AC` path.
pub fn is_ac_online() -> bool {
    PowerSupply::default().is_ac_online()
}

/// Parse the first whitespace-separated token of a sysfs attribute.
fn read_number<T: FromStr>(path: &Path) -> Option<T> {
    let raw = std::fs::read_to_string(path).ok()?;
    raw.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use batnotify_core::state::ERROR_MESSAGE;
    use tempfile::TempDir;

    fn fake_supply(now: Option<&str>, full: Option<&str>, ac: Option<&str>) -> (TempDir, PowerSupply) {
        let dir = tempfile::tempdir().unwrap();
        let supply = PowerSupply {
            energy_now:  dir.path().join("energy_now"),
            energy_full: dir.path().join("energy_full"),
            ac_online:   dir.path().join("online"),
        };
        for (path, content) in [
            (&supply.energy_now, now),
            (&supply.energy_full, full),
            (&supply.ac_online, ac),
        ] {
            if let Some(content) = content {
                std::fs::write(path, content).unwrap();
            }
        }
        (dir, supply)
    }

    #[test]
    fn half_battery() {
        let (_dir, supply) = fake_supply(Some("50\n"), Some("100\n"), None);
        assert_eq!(supply.read_percentage(), "- Warning: Battery 49.00% -");
    }

    #[test]
    fn realistic_sysfs_values() {
        let (_dir, supply) = fake_supply(Some("8640000\n"), Some("43200000\n"), None);
        assert_eq!(supply.read_percentage(), "- Warning: Battery 19.00% -");
    }

    #[test]
    fn zero_full_is_error() {
        let (_dir, supply) = fake_supply(Some("50\n"), Some("0\n"), None);
        assert_eq!(supply.read_percentage(), ERROR_MESSAGE);
    }

    #[test]
    fn missing_files_are_error() {
        let (_dir, supply) = fake_supply(None, Some("100\n"), None);
        assert_eq!(supply.read_percentage(), ERROR_MESSAGE);

        let (_dir, supply) = fake_supply(None, None, None);
        assert_eq!(supply.read_percentage(), ERROR_MESSAGE);
    }

    #[test]
    fn non_numeric_energy_is_error() {
        let (_dir, supply) = fake_supply(Some("lots\n"), Some("100\n"), None);
        assert_eq!(supply.read_percentage(), ERROR_MESSAGE);
    }

    #[test]
    fn ac_online_only_for_one() {
        let (_dir, supply) = fake_supply(None, None, Some("1\n"));
        assert!(supply.is_ac_online());

        for content in ["0\n", "2\n", "-1\n", "yes\n", ""] {
            let (_dir, supply) = fake_supply(None, None, Some(content));
            assert!(!supply.is_ac_online(), "content {content:?}");
        }
    }

    #[test]
    fn whole_token_must_be_numeric() {
        let (_dir, supply) = fake_supply(Some("50abc\n"), Some("100\n"), Some("1.0\n"));
        assert_eq!(supply.read_percentage(), ERROR_MESSAGE);
        assert!(!supply.is_ac_online());

        let (_dir, supply) = fake_supply(Some("50.5\n"), Some("100 extra\n"), Some("1 trailing\n"));
        assert_eq!(supply.read_percentage(), "- Warning: Battery 49.50% -");
        assert!(supply.is_ac_online());
    }

    #[test]
    fn ac_missing_file_is_offline() {
        let (_dir, supply) = fake_supply(None, None, None);
        assert!(!supply.is_ac_online());
    }

    #[test]
    fn default_paths_point_at_sysfs() {
        let supply = PowerSupply::default();
        assert_eq!(supply.energy_now, PathBuf::from("/sys/class/power_supply/BAT0/energy_now"));
        assert_eq!(supply.ac_online, PathBuf::from("/sys/class/power_supply/AC/online"));
    }
}
