//! # StarBar Constants
//!
//! Fixed tuning values for the rating bar.
//!
//! Timing values here are the defaults for [`crate::config::TimingConfig`];
//! the geometry values are not configurable.

// =============================================================================
// ITEMS
// =============================================================================

/// Number of stars in the bar.
pub const ITEM_COUNT: usize = 10;

/// Labels drawn on each star, indexed by position.
pub const LABELS: [&str; ITEM_COUNT] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

/// Resting scale of an unselected star.
pub const BASE_SIZE: f32 = 1.0;

/// Scale of the star under the finger while sliding.
pub const FOCUSED_SIZE: f32 = 2.0;

/// Distance below which a star counts as having reached its target size.
pub const REST_THRESHOLD: f32 = 0.01;

// =============================================================================
// RANGES
// =============================================================================

/// Lowest rating drawn yellow by default.
pub const DEFAULT_YELLOW_START: u8 = 4;

/// Lowest rating drawn green by default.
pub const DEFAULT_GREEN_START: u8 = 7;

// =============================================================================
// TIMING
// =============================================================================

/// Delay between release and the bar snapping back to rest.
pub const SETTLE_DELAY_MS: u64 = 1700;

/// Gestures longer than this (press to release) are reported as swipes.
pub const SWIPE_THRESHOLD_MS: u64 = 500;

/// Time for a full 1.0 size change at top speed.
pub const MS_PER_SIZE_UNIT: u64 = 150;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Extra height reserved above the sprite so the focused star can grow.
pub const MEASURE_HEIGHT_FACTOR: f32 = 1.2;

/// Resting star centers sit at this fraction of the bar height.
pub const BASE_Y_FRACTION: f32 = 2.0 / 3.0;

/// A fully focused star is lifted by this fraction of the bar height.
pub const LIFT_FRACTION: f32 = 0.2;

/// Pressed sprites carry highlight padding and are scaled down by this factor.
pub const PRESSED_SPRITE_SCALE: f32 = 0.37;

/// The background covers everything below this fraction of the height.
pub const BACKGROUND_TOP_FRACTION: f32 = 1.0 / 3.0;
