//! # StarBar Configuration
//!
//! Ranges and timing loaded from TOML. Every field is optional; missing
//! values fall back to the constants in [`crate::constants`].
//!
//! ```toml
//! [ranges]
//! yellow_start = 4
//! green_start = 7
//!
//! [timing]
//! settle_delay_ms = 1700
//! swipe_threshold_ms = 500
//! ms_per_size_unit = 150
//! ```

use crate::constants::{MS_PER_SIZE_UNIT, SETTLE_DELAY_MS, SWIPE_THRESHOLD_MS};
use crate::error::{StarBarError, StarBarResult};
use crate::tier::RatingRanges;
use serde::Deserialize;
use std::path::Path;

/// Gesture and animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between release and the bar returning to rest.
    pub settle_delay_ms: u64,
    /// Gestures lasting longer than this are reported as swipes.
    pub swipe_threshold_ms: u64,
    /// Time for a full 1.0 size change at top speed.
    pub ms_per_size_unit: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            swipe_threshold_ms: SWIPE_THRESHOLD_MS,
            ms_per_size_unit: MS_PER_SIZE_UNIT,
        }
    }
}

/// Complete star bar configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarBarConfig {
    /// Tier boundaries.
    pub ranges: RatingRanges,
    /// Timing values.
    pub timing: TimingConfig,
}

impl StarBarConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`StarBarError::ConfigParse`] for malformed TOML and the
    /// errors of [`StarBarConfig::validate`] for bad values.
    pub fn from_toml_str(text: &str) -> StarBarResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`StarBarError::Io`] if the file cannot be read, otherwise the
    /// errors of [`StarBarConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> StarBarResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StarBarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks ranges and timing.
    ///
    /// # Errors
    ///
    /// Returns [`StarBarError::InvalidRanges`] for bad ranges and
    /// [`StarBarError::InvalidConfig`] for a zero animation speed.
    pub fn validate(&self) -> StarBarResult<()> {
        self.ranges.validate()?;
        if self.timing.ms_per_size_unit == 0 {
            return Err(StarBarError::InvalidConfig(
                "timing.ms_per_size_unit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StarBarConfig::from_toml_str("").unwrap();
        assert_eq!(config, StarBarConfig::default());
        assert_eq!(config.timing.settle_delay_ms, 1700);
        assert_eq!(config.ranges.yellow_start, 4);
    }

    #[test]
    fn test_partial_config() {
        let config = StarBarConfig::from_toml_str(
            "[ranges]\nyellow_start = 2\ngreen_start = 4\n\n[timing]\nsettle_delay_ms = 900\n",
        )
        .unwrap();

        assert_eq!(config.ranges, RatingRanges::new(2, 4).unwrap());
        assert_eq!(config.timing.settle_delay_ms, 900);
        assert_eq!(config.timing.swipe_threshold_ms, 500);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let err = StarBarConfig::from_toml_str("[ranges]\nyellow_start = 8\ngreen_start = 3\n")
            .unwrap_err();
        assert!(matches!(err, StarBarError::InvalidRanges { yellow: 8, green: 3 }));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let err = StarBarConfig::from_toml_str("[timing]\nms_per_size_unit = 0\n").unwrap_err();
        assert!(matches!(err, StarBarError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StarBarConfig::from_toml_str("[ranges\n").unwrap_err();
        assert!(matches!(err, StarBarError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = StarBarConfig::from_toml_file("/nonexistent/starbar.toml").unwrap_err();
        assert!(matches!(err, StarBarError::Io { .. }));
    }
}
