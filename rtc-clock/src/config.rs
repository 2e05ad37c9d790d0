//! Tunables for the local clock.

/// Ticks between resynchronisations: once a second at a 60 Hz host tick.
pub const DEFAULT_REFRESH_TICKS: u8 = 60;

/// Year the RTC's two-digit year counts from.
pub const DEFAULT_BASE_YEAR: u16 = 2000;

/// Configuration of a [`crate::LocalClock`].
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct ClockConfig {
    /// Counter value at which the refresh window rolls over. Zero is treated as one.
    pub refresh_ticks: u8,
    /// Added to the RTC's two-digit year.
    pub base_year: u16,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            refresh_ticks: DEFAULT_REFRESH_TICKS,
            base_year: DEFAULT_BASE_YEAR,
        }
    }
}

impl ClockConfig {
    pub(crate) const fn threshold(&self) -> u8 {
        if self.refresh_ticks == 0 {
            1
        } else {
            self.refresh_ticks
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClockConfig::default();
        assert_eq!(config.refresh_ticks, 60);
        assert_eq!(config.base_year, 2000);
        assert_eq!(config.threshold(), 60);
    }

    #[test]
    fn test_zero_refresh_is_clamped() {
        let config = ClockConfig {
            refresh_ticks: 0,
            ..Default::default()
        };
        assert_eq!(config.threshold(), 1);
    }
}
