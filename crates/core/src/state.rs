/// Flat offset subtracted from the computed charge before display.
pub const PERCENT_OFFSET: f64 = 1.0;

/// Shown in place of a number when the battery cannot be read.
pub const ERROR_MESSAGE: &str = "- Warning: Battery Error% -";

/// A single battery poll, derived fresh on every tick and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Displayed charge level, already offset by [`PERCENT_OFFSET`].
    pub percentage: f64,
    /// `false` when a read failed or the full-energy value was not positive.
    pub valid: bool,
}

impl BatteryReading {
    /// Build a reading from raw `energy_now` / `energy_full` values.
    pub fn from_energy(now: f64, full: f64) -> Self {
        if full > 0.0 {
            Self {
                percentage: (now / full) * 100.0 - PERCENT_OFFSET,
                valid:      true,
            }
        } else {
            Self::invalid()
        }
    }

    pub fn invalid() -> Self {
        Self { percentage: 0.0, valid: false }
    }

    /// Fixed-width warning text drawn in the popup.
    pub fn message(&self) -> String {
        if self.valid {
            format!("- Warning: Battery {:.2}% -", self.percentage)
        } else {
            ERROR_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_charge_shows_offset_value() {
        let reading = BatteryReading::from_energy(50.0, 100.0);
        assert!(reading.valid);
        assert_eq!(reading.message(), "- Warning: Battery 49.00% -");
    }

    #[test]
    fn zero_full_is_error() {
        let reading = BatteryReading::from_energy(50.0, 0.0);
        assert!(!reading.valid);
        assert_eq!(reading.message(), ERROR_MESSAGE);
    }

    #[test]
    fn negative_full_is_error() {
        assert_eq!(BatteryReading::from_energy(10.0, -5.0).message(), ERROR_MESSAGE);
    }

    #[test]
    fn two_decimal_places() {
        let reading = BatteryReading::from_energy(12_345.0, 56_789.0);
        assert_eq!(reading.message(), "- Warning: Battery 20.74% -");
    }

    #[test]
    fn empty_battery_goes_negative() {
        assert_eq!(
            BatteryReading::from_energy(0.0, 100.0).message(),
            "- Warning: Battery -1.00% -"
        );
    }
}
