//! Pointer input for the star bar.
//!
//! Coordinates are widget-local: x grows to the right from the left edge,
//! y grows downward from the top edge (negative above the bar).

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Finger or button went down on the bar.
    Down,
    /// Pointer moved while down.
    Move,
    /// Finger or button was lifted.
    Up,
    /// The platform aborted the gesture.
    Cancel,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Widget-local x.
    pub x: f32,
    /// Widget-local y.
    pub y: f32,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub const fn new(action: PointerAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self { action, x, y, time_ms }
    }

    /// Pointer went down at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerAction::Down, x, y, time_ms)
    }

    /// Pointer moved to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerAction::Move, x, y, time_ms)
    }

    /// Pointer was released at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerAction::Up, x, y, time_ms)
    }

    /// Platform cancel. The position is irrelevant.
    #[must_use]
    pub const fn cancel(time_ms: u64) -> Self {
        Self::new(PointerAction::Cancel, 0.0, 0.0, time_ms)
    }
}
