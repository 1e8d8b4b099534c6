//! Rating tiers and the ranges that separate them.

use crate::constants::{DEFAULT_GREEN_START, DEFAULT_YELLOW_START, ITEM_COUNT};
use crate::error::{StarBarError, StarBarResult};
use serde::Deserialize;

/// Color band a rating falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Below the yellow range.
    Red,
    /// From the yellow start up to (not including) the green start.
    Yellow,
    /// From the green start to the top rating.
    Green,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// Position of this tier in [`Tier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }
}

/// Start points of the yellow and green ranges.
///
/// ```text
/// 1 <= (red) < yellow_start <= (yellow) < green_start <= (green) <= 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RatingRanges {
    /// Lowest rating drawn yellow.
    pub yellow_start: u8,
    /// Lowest rating drawn green.
    pub green_start: u8,
}

impl RatingRanges {
    /// Creates validated ranges.
    ///
    /// # Errors
    ///
    /// Returns [`StarBarError::InvalidRanges`] unless
    /// `1 <= yellow <= green <= 10`.
    pub fn new(yellow: u8, green: u8) -> StarBarResult<Self> {
        let ranges = Self {
            yellow_start: yellow,
            green_start: green,
        };
        ranges.validate()?;
        Ok(ranges)
    }

    /// Checks the range invariant.
    ///
    /// # Errors
    ///
    /// Returns [`StarBarError::InvalidRanges`] when the invariant is violated.
    pub fn validate(&self) -> StarBarResult<()> {
        let max = u8::try_from(ITEM_COUNT).unwrap_or(u8::MAX);
        if self.yellow_start >= 1 && self.yellow_start <= self.green_start && self.green_start <= max {
            Ok(())
        } else {
            Err(StarBarError::InvalidRanges {
                yellow: self.yellow_start,
                green: self.green_start,
            })
        }
    }

    /// Tier of a whole rating.
    #[must_use]
    pub fn tier_for_rating(&self, rating: u8) -> Tier {
        if rating < self.yellow_start {
            Tier::Red
        } else if rating < self.green_start {
            Tier::Yellow
        } else {
            Tier::Green
        }
    }

    /// Tier used to color the bar while sliding at `slide_position`.
    ///
    /// Uses the ceiling of the fractional position.
    #[must_use]
    pub fn tier_for_position(&self, slide_position: f32) -> Tier {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rating = slide_position.clamp(0.0, f32::from(u8::MAX)).ceil() as u8;
        self.tier_for_rating(rating)
    }
}

impl Default for RatingRanges {
    fn default() -> Self {
        Self {
            yellow_start: DEFAULT_YELLOW_START,
            green_start: DEFAULT_GREEN_START,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let ranges = RatingRanges::default();

        assert_eq!(ranges.tier_for_rating(3), Tier::Red);
        assert_eq!(ranges.tier_for_rating(5), Tier::Yellow);
        assert_eq!(ranges.tier_for_rating(8), Tier::Green);
    }

    #[test]
    fn test_alternative_ranges() {
        let ranges = RatingRanges::new(2, 4).unwrap();

        assert_eq!(ranges.tier_for_rating(1), Tier::Red);
        assert_eq!(ranges.tier_for_rating(3), Tier::Yellow);
        assert_eq!(ranges.tier_for_rating(5), Tier::Green);
    }

    #[test]
    fn test_position_uses_ceiling() {
        let ranges = RatingRanges::default();

        // 3.0 is rating 4 but its ceiling is still 3
        assert_eq!(ranges.tier_for_position(3.0), Tier::Red);
        assert_eq!(ranges.tier_for_position(3.2), Tier::Yellow);
        assert_eq!(ranges.tier_for_position(6.5), Tier::Green);
    }

    #[test]
    fn test_rejects_invalid_ranges() {
        assert!(RatingRanges::new(0, 4).is_err());
        assert!(RatingRanges::new(5, 4).is_err());
        assert!(RatingRanges::new(4, 11).is_err());
        assert!(RatingRanges::new(10, 10).is_ok());
    }
}
