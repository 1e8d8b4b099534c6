//! Size animator for the star row.
//!
//! Each star's current size chases its target size at a bounded rate:
//! a full 1.0 size change takes `ms_per_size_unit` milliseconds at top
//! speed. Motion is linear and never overshoots.

use crate::constants::{BASE_SIZE, FOCUSED_SIZE, ITEM_COUNT, MS_PER_SIZE_UNIT, REST_THRESHOLD};

/// Result of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No time passed since the previous tick; nothing changed.
    Skipped,
    /// Sizes moved. `at_rest` is true once every star reached its target.
    Advanced {
        /// Every star is within the rest threshold of its target.
        at_rest: bool,
    },
}

/// Current and target sizes for every star.
#[derive(Debug, Clone)]
pub struct SizeAnimator {
    /// Size drawn this frame.
    current: [f32; ITEM_COUNT],
    /// Size each star is moving toward.
    target: [f32; ITEM_COUNT],
    /// Time of the previous tick (ms).
    last_update_ms: u64,
    /// Time for a full 1.0 size change.
    ms_per_unit: f32,
}

impl SizeAnimator {
    /// Creates an animator with every star at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::with_speed(MS_PER_SIZE_UNIT)
    }

    /// Creates an animator with a custom speed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn with_speed(ms_per_size_unit: u64) -> Self {
        Self {
            current: [BASE_SIZE; ITEM_COUNT],
            target: [BASE_SIZE; ITEM_COUNT],
            last_update_ms: 0,
            ms_per_unit: ms_per_size_unit.max(1) as f32,
        }
    }

    /// Sizes to draw.
    #[must_use]
    pub fn current(&self) -> &[f32; ITEM_COUNT] {
        &self.current
    }

    /// Sizes being animated toward.
    #[must_use]
    pub fn targets(&self) -> &[f32; ITEM_COUNT] {
        &self.target
    }

    /// Index of the star currently targeted at the focused size, if any.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.target.iter().position(|&size| size > BASE_SIZE)
    }

    /// Makes `index` the only enlarged star.
    ///
    /// Returns true if any target changed.
    pub fn focus(&mut self, index: usize) -> bool {
        let mut next = [BASE_SIZE; ITEM_COUNT];
        if let Some(slot) = next.get_mut(index) {
            *slot = FOCUSED_SIZE;
        }
        self.replace_targets(next)
    }

    /// Returns every star to the base size.
    ///
    /// Returns true if any target changed.
    pub fn reset_targets(&mut self) -> bool {
        self.replace_targets([BASE_SIZE; ITEM_COUNT])
    }

    fn replace_targets(&mut self, next: [f32; ITEM_COUNT]) -> bool {
        let changed = self.target != next;
        self.target = next;
        changed
    }

    /// Returns true when every star is within the rest threshold of its target.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.current
            .iter()
            .zip(&self.target)
            .all(|(current, target)| (current - target).abs() <= REST_THRESHOLD)
    }

    /// Starts a new run of ticks measured from `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.last_update_ms = now_ms;
    }

    /// Advances every star toward its target.
    ///
    /// The step is bounded by the time elapsed since the previous tick.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let elapsed = now_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = now_ms;
        if elapsed == 0 {
            return TickOutcome::Skipped;
        }

        #[allow(clippy::cast_precision_loss)]
        let max_step = elapsed as f32 / self.ms_per_unit;
        for (current, &target) in self.current.iter_mut().zip(&self.target) {
            let distance = target - *current;
            if distance != 0.0 {
                *current += distance.clamp(-max_step, max_step);
            }
        }

        TickOutcome::Advanced {
            at_rest: self.is_at_rest(),
        }
    }
}

impl Default for SizeAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_rest() {
        let animator = SizeAnimator::new();
        assert!(animator.is_at_rest());
        assert_eq!(animator.focused(), None);
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut animator = SizeAnimator::new();

        assert!(animator.focus(3));
        assert!(!animator.focus(3));
        assert!(animator.focus(7));

        assert_eq!(animator.focused(), Some(7));
        let enlarged = animator.targets().iter().filter(|&&s| s > BASE_SIZE).count();
        assert_eq!(enlarged, 1);
    }

    #[test]
    fn test_step_is_bounded() {
        let mut animator = SizeAnimator::new();
        animator.focus(0);
        animator.restart(0);

        // 75ms at 150ms per unit is half a unit
        animator.tick(75);
        assert!((animator.current()[0] - 1.5).abs() < 1e-5);
        assert!(!animator.is_at_rest());
    }

    #[test]
    fn test_never_overshoots() {
        let mut animator = SizeAnimator::new();
        animator.focus(2);
        animator.restart(0);

        assert_eq!(animator.tick(10_000), TickOutcome::Advanced { at_rest: true });
        assert_eq!(animator.current()[2], FOCUSED_SIZE);

        animator.reset_targets();
        animator.tick(20_000);
        assert_eq!(animator.current()[2], BASE_SIZE);
    }

    #[test]
    fn test_zero_elapsed_is_skipped() {
        let mut animator = SizeAnimator::new();
        animator.focus(1);
        animator.restart(500);

        assert_eq!(animator.tick(500), TickOutcome::Skipped);
        assert_eq!(animator.current()[1], BASE_SIZE);
    }

    #[test]
    fn test_converges_with_fixed_step() {
        let mut animator = SizeAnimator::new();
        animator.focus(5);
        animator.restart(0);

        let mut now = 0;
        let mut ticks = 0;
        loop {
            now += 16;
            ticks += 1;
            if let TickOutcome::Advanced { at_rest: true } = animator.tick(now) {
                break;
            }
            assert!(ticks < 100, "animator failed to converge");
        }

        // 150ms / 16ms per tick
        assert_eq!(ticks, 10);
        assert!(animator.is_at_rest());
    }
}
