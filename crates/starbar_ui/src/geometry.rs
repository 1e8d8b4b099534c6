//! Geometry engine for star placement.
//!
//! Forward mapping turns animated sizes into star centers; inverse mapping
//! turns a touch x-coordinate into a fractional star index.

use crate::constants::{
    BASE_SIZE, BASE_Y_FRACTION, FOCUSED_SIZE, ITEM_COUNT, LIFT_FRACTION, MEASURE_HEIGHT_FACTOR,
};

/// A point in widget-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in widget-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Dimensions of the bar after layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Total width.
    pub width: f32,
    /// Total height.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of one star slot when every star is at rest.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn item_width(&self) -> f32 {
        self.width / ITEM_COUNT as f32
    }

    /// Returns true once the host has given the bar a usable width.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.width.is_finite()
    }
}

/// Placement of one star.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemSlot {
    /// Center of the star.
    pub center: Point,
    /// Horizontal space allocated to the star.
    pub width: f32,
    /// How far the star is lifted toward its focused position (0 at rest, 1 focused).
    pub lift: f32,
}

/// Height the bar asks for given the neutral sprite's intrinsic height.
#[must_use]
pub fn measured_height(sprite_height: f32) -> f32 {
    (sprite_height * MEASURE_HEIGHT_FACTOR).trunc()
}

/// Maps a touch x-coordinate to a fractional star index in `[0, ITEM_COUNT - 1]`.
///
/// Returns 0 before layout.
#[must_use]
pub fn relative_position(x: f32, viewport: Viewport) -> f32 {
    let item_width = viewport.item_width();
    if item_width <= 0.0 || !item_width.is_finite() {
        return 0.0;
    }
    let position = x / item_width;
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, LAST_INDEX)
}

/// Converts a fractional index into a 1-based rating.
#[must_use]
pub fn rating_at(position: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = position.clamp(0.0, LAST_INDEX).floor() as u8;
    index + 1
}

/// Converts a fractional index into the index of the star under it.
#[must_use]
pub fn item_at(position: f32) -> usize {
    usize::from(rating_at(position) - 1)
}

/// Fractional index of the rightmost star.
#[allow(clippy::cast_precision_loss)]
const LAST_INDEX: f32 = (ITEM_COUNT - 1) as f32;

/// Lift factor for a square-root compressed width.
fn lift_for(width: f32) -> f32 {
    let focused = FOCUSED_SIZE.sqrt();
    let base = BASE_SIZE.sqrt();
    1.0 - (focused - width) / (focused - base)
}

/// Lays out every star from its current size.
///
/// Widths are `sqrt(size)` normalized to fill the viewport, so a growing
/// star compresses its neighbors. Returns `None` when the viewport has no
/// width yet, leaving the caller's previous positions untouched.
#[must_use]
pub fn layout(sizes: &[f32; ITEM_COUNT], viewport: Viewport) -> Option<[ItemSlot; ITEM_COUNT]> {
    if !viewport.is_laid_out() {
        return None;
    }

    let widths = sizes.map(f32::sqrt);
    let total: f32 = widths.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let base_y = viewport.height * BASE_Y_FRACTION;
    let mut slots = [ItemSlot::default(); ITEM_COUNT];
    let mut left = 0.0;

    for (slot, width) in slots.iter_mut().zip(widths) {
        let allocated = viewport.width * (width / total);
        let lift = lift_for(width);
        slot.center = Point::new(
            left + allocated / 2.0,
            base_y - lift * viewport.height * LIFT_FRACTION,
        );
        slot.width = allocated;
        slot.lift = lift;
        left += allocated;
    }

    Some(slots)
}
