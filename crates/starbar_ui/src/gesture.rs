//! Gesture state machine.
//!
//! ```text
//!            press (accepted)            release
//!   Idle ─────────────────────> Sliding ─────────> Settling
//!    ^                           │  │                  │
//!    │       cancel / overdrag   │  │ move             │ settle delay
//!    └───────────────────────────┘  └──> Sliding       │
//!    └─────────────────────────────────────────────────┘
//! ```
//!
//! The tracker never touches the animator or the listener itself. Every
//! transition returns a [`GestureOutcome`] describing the event to emit,
//! the target sizes to apply, and whether a settle must be scheduled.

use crate::constants::SWIPE_THRESHOLD_MS;
use crate::geometry::{item_at, rating_at, relative_position, Viewport};
use crate::listener::RatingEvent;
use tracing::debug;

/// Where the current gesture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture; every star at rest.
    #[default]
    Idle,
    /// Finger down and tracking.
    Sliding,
    /// Released; the last highlighted star stays up until the settle delay.
    Settling,
}

/// Change to apply to the animator's target sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetChange {
    /// Leave targets alone.
    #[default]
    Keep,
    /// Enlarge only this star.
    Focus(usize),
    /// Return every star to base size.
    Reset,
}

/// Effects of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureOutcome {
    /// Event for the listener, if any.
    pub event: Option<RatingEvent>,
    /// Target size update.
    pub targets: TargetChange,
    /// Schedule a settle carrying this generation.
    pub settle: Option<u64>,
}

impl GestureOutcome {
    /// Nothing happened.
    pub const NONE: Self = Self {
        event: None,
        targets: TargetChange::Keep,
        settle: None,
    };

    const fn reset(event: Option<RatingEvent>) -> Self {
        Self {
            event,
            targets: TargetChange::Reset,
            settle: None,
        }
    }
}

/// Tracks one gesture at a time.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    /// Fractional index under the finger. Meaningful only while sliding.
    slide_position: f32,
    /// Last pending rating reported.
    current_rating: Option<u8>,
    /// The listener refused this gesture.
    canceled: bool,
    /// When the gesture started (ms).
    start_time_ms: u64,
    /// Bumped on every gesture so stale settles can be recognized.
    generation: u64,
    swipe_threshold_ms: u64,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::with_swipe_threshold(SWIPE_THRESHOLD_MS)
    }

    /// Creates an idle tracker with a custom swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(swipe_threshold_ms: u64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            slide_position: 0.0,
            current_rating: None,
            canceled: false,
            start_time_ms: 0,
            generation: 0,
            swipe_threshold_ms,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// True while sliding or settling; the bar is drawn highlighted.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Fractional index under the finger, defined only while sliding.
    #[must_use]
    pub fn slide_position(&self) -> Option<f32> {
        self.is_sliding().then_some(self.slide_position)
    }

    /// Last pending rating reported, if a slide is in progress.
    #[must_use]
    pub fn current_rating(&self) -> Option<u8> {
        self.current_rating
    }

    /// True if the listener refused the current gesture.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Generation of the current gesture.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a gesture. `accepted` is the listener's answer to the start.
    pub fn press(&mut self, x: f32, viewport: Viewport, time_ms: u64, accepted: bool) -> GestureOutcome {
        self.generation += 1;
        self.start_time_ms = time_ms;
        self.current_rating = None;
        self.canceled = !accepted;

        if !accepted {
            debug!(generation = self.generation, "rating refused by listener");
            // A refused press supersedes any pending settle, so rest now.
            let was_active = self.is_sliding();
            self.phase = GesturePhase::Idle;
            return if was_active {
                GestureOutcome::reset(None)
            } else {
                GestureOutcome::NONE
            };
        }

        debug!(generation = self.generation, x, "rating started");
        self.phase = GesturePhase::Sliding;
        self.slide_to(x, viewport)
    }

    /// Follows the finger.
    pub fn move_to(&mut self, x: f32, viewport: Viewport) -> GestureOutcome {
        if self.canceled || self.phase != GesturePhase::Sliding {
            return GestureOutcome::NONE;
        }
        self.slide_to(x, viewport)
    }

    fn slide_to(&mut self, x: f32, viewport: Viewport) -> GestureOutcome {
        self.slide_position = relative_position(x, viewport);
        let rating = rating_at(self.slide_position);

        let event = if self.current_rating == Some(rating) {
            None
        } else {
            self.current_rating = Some(rating);
            Some(RatingEvent::Pending(rating))
        };

        GestureOutcome {
            event,
            targets: TargetChange::Focus(item_at(self.slide_position)),
            settle: None,
        }
    }

    /// Ends the gesture at `(x, y)`.
    ///
    /// Releasing more than one bar height above the top edge cancels.
    pub fn release(&mut self, x: f32, y: f32, viewport: Viewport, time_ms: u64) -> GestureOutcome {
        if self.canceled || self.phase != GesturePhase::Sliding {
            return GestureOutcome::NONE;
        }
        self.current_rating = None;

        if y < -viewport.height {
            debug!(generation = self.generation, y, "rating canceled by overdrag");
            self.phase = GesturePhase::Idle;
            return GestureOutcome::reset(Some(RatingEvent::Cancel));
        }

        self.slide_position = relative_position(x, viewport);
        let rating = rating_at(self.slide_position);
        let swipe = time_ms.saturating_sub(self.start_time_ms) > self.swipe_threshold_ms;
        self.phase = GesturePhase::Settling;
        debug!(generation = self.generation, rating, swipe, "rating released");

        GestureOutcome {
            event: Some(RatingEvent::Final { rating, swipe }),
            targets: TargetChange::Focus(item_at(self.slide_position)),
            settle: Some(self.generation),
        }
    }

    /// Platform cancel.
    pub fn cancel(&mut self) -> GestureOutcome {
        if self.canceled || self.phase != GesturePhase::Sliding {
            return GestureOutcome::NONE;
        }
        debug!(generation = self.generation, "rating canceled");
        self.current_rating = None;
        self.phase = GesturePhase::Idle;
        GestureOutcome::reset(Some(RatingEvent::Cancel))
    }

    /// Deferred return to rest scheduled by [`GestureTracker::release`].
    ///
    /// A no-op if another gesture started since.
    pub fn settle(&mut self, generation: u64) -> GestureOutcome {
        if generation != self.generation || self.phase != GesturePhase::Settling {
            debug!(generation, current = self.generation, "stale settle ignored");
            return GestureOutcome::NONE;
        }
        debug!(generation, "settled");
        self.phase = GesturePhase::Idle;
        GestureOutcome::reset(None)
    }

    /// Abandons whatever is in progress because the widget was disabled.
    ///
    /// A live slide is reported as canceled.
    pub fn abort(&mut self) -> GestureOutcome {
        self.generation += 1;
        let previous = self.phase;
        self.phase = GesturePhase::Idle;
        self.current_rating = None;
        self.canceled = false;

        match previous {
            GesturePhase::Idle => GestureOutcome::NONE,
            GesturePhase::Sliding => GestureOutcome::reset(Some(RatingEvent::Cancel)),
            GesturePhase::Settling => GestureOutcome::reset(None),
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
