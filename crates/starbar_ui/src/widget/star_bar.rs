//! The star bar widget.
//!
//! Owns every piece of rating state and is driven entirely by the host:
//! pointer events go to [`StarBar::handle_pointer`], time goes to
//! [`StarBar::advance`]. Animation ticks and the settle after release are
//! tasks on the internal [`Scheduler`], so nothing runs behind the host's back.

use std::fmt;

use tracing::{debug, trace, warn};

use super::{Widget, WidgetFlags};
use crate::animation::{SizeAnimator, TickOutcome};
use crate::config::{StarBarConfig, TimingConfig};
use crate::constants::ITEM_COUNT;
use crate::error::StarBarResult;
use crate::geometry::{layout, measured_height, ItemSlot, Point, Viewport};
use crate::gesture::{GestureOutcome, GesturePhase, GestureTracker, TargetChange};
use crate::input::{PointerAction, PointerEvent};
use crate::listener::{RatingEvent, RatingListener};
use crate::render::{RenderCommand, StarFrame};
use crate::resources::{SpriteKey, StarAssets, StarResources};
use crate::scheduler::{Scheduler, Task, TaskToken};
use crate::style::BarStyle;
use crate::tier::RatingRanges;

/// A row of ten stars rated by touch or swipe.
pub struct StarBar {
    flags: WidgetFlags,
    viewport: Viewport,
    /// Placement derived from the current sizes.
    slots: [ItemSlot; ITEM_COUNT],
    animator: SizeAnimator,
    gesture: GestureTracker,
    scheduler: Scheduler,
    /// Token of the pending animation tick while the animator runs.
    animation: Option<TaskToken>,
    ranges: RatingRanges,
    timing: TimingConfig,
    assets: StarAssets,
    style: BarStyle,
    listener: Option<Box<dyn RatingListener>>,
}

impl StarBar {
    /// Creates a bar with default ranges and timing.
    #[must_use]
    pub fn new(resources: &dyn StarResources) -> Self {
        Self::with_config(StarBarConfig::default(), resources)
    }

    /// Creates a bar from a configuration.
    ///
    /// The configuration is expected to be validated, as
    /// [`StarBarConfig::from_toml_str`] does.
    #[must_use]
    pub fn with_config(config: StarBarConfig, resources: &dyn StarResources) -> Self {
        Self {
            flags: WidgetFlags::new(),
            viewport: Viewport::default(),
            slots: [ItemSlot::default(); ITEM_COUNT],
            animator: SizeAnimator::with_speed(config.timing.ms_per_size_unit),
            gesture: GestureTracker::with_swipe_threshold(config.timing.swipe_threshold_ms),
            scheduler: Scheduler::new(),
            animation: None,
            ranges: config.ranges,
            timing: config.timing,
            assets: StarAssets::load(resources),
            style: BarStyle::default(),
            listener: None,
        }
    }

    /// Installs the listener for rating events, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl RatingListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener. Events are dropped until a new one is set.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Redefines where the yellow and green ranges start.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StarBarError::InvalidRanges`] unless
    /// `1 <= yellow <= green <= 10`; the current ranges are kept.
    pub fn set_ranges(&mut self, yellow: u8, green: u8) -> StarBarResult<()> {
        match RatingRanges::new(yellow, green) {
            Ok(ranges) => {
                self.ranges = ranges;
                self.request_redraw();
                Ok(())
            }
            Err(err) => {
                warn!(yellow, green, "rejected rating ranges");
                Err(err)
            }
        }
    }

    /// Current tier boundaries.
    #[must_use]
    pub fn ranges(&self) -> RatingRanges {
        self.ranges
    }

    /// Replaces the colors.
    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
        self.request_redraw();
    }

    /// Reloads cached sprites and font size after an environment change.
    ///
    /// Rating state is untouched.
    pub fn configuration_changed(&mut self, resources: &dyn StarResources) {
        self.assets = StarAssets::load(resources);
        debug!(font_size = self.assets.label_font_size(), "star resources reloaded");
        self.request_redraw();
    }

    /// Sets the bar's dimensions after layout.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.relayout();
        self.request_redraw();
    }

    /// Current dimensions.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Enables or disables input.
    ///
    /// Disabling mid-gesture reports a cancel and returns the stars to rest.
    pub fn set_enabled(&mut self, enabled: bool, now_ms: u64) {
        if enabled {
            self.flags.set(WidgetFlags::ENABLED);
            return;
        }
        self.flags.clear(WidgetFlags::ENABLED);
        let outcome = self.gesture.abort();
        self.apply(outcome, now_ms);
        self.ensure_animating(now_ms);
    }

    /// True if pointer input is accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// True while the bar is highlighted (sliding or settling).
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.gesture.is_sliding()
    }

    /// Fractional star index under the finger, while sliding.
    #[must_use]
    pub fn slide_position(&self) -> Option<f32> {
        self.gesture.slide_position()
    }

    /// Last pending rating reported in the current slide.
    #[must_use]
    pub fn current_rating(&self) -> Option<u8> {
        self.gesture.current_rating()
    }

    /// Sizes being drawn.
    #[must_use]
    pub fn current_sizes(&self) -> &[f32; ITEM_COUNT] {
        self.animator.current()
    }

    /// Sizes being animated toward.
    #[must_use]
    pub fn target_sizes(&self) -> &[f32; ITEM_COUNT] {
        self.animator.targets()
    }

    /// Star centers from the latest layout.
    #[must_use]
    pub fn positions(&self) -> [Point; ITEM_COUNT] {
        self.slots.map(|slot| slot.center)
    }

    /// Star placement from the latest layout.
    #[must_use]
    pub fn slots(&self) -> &[ItemSlot; ITEM_COUNT] {
        &self.slots
    }

    /// True while an animation tick is scheduled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn frame(&self) -> StarFrame<'_> {
        StarFrame {
            viewport: self.viewport,
            slots: &self.slots,
            sizes: self.animator.current(),
            slide_position: self.gesture.slide_position(),
            ranges: &self.ranges,
            assets: &self.assets,
            style: &self.style,
        }
    }

    fn request_redraw(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    fn relayout(&mut self) {
        // Before the host sizes us there is nothing to place.
        if let Some(slots) = layout(self.animator.current(), self.viewport) {
            self.slots = slots;
        }
    }

    /// Carries out a gesture transition.
    fn apply(&mut self, outcome: GestureOutcome, now_ms: u64) {
        if let (Some(event), Some(listener)) = (outcome.event, self.listener.as_mut()) {
            match event {
                RatingEvent::Start => {}
                RatingEvent::Pending(rating) => listener.on_pending_rating(rating),
                RatingEvent::Final { rating, swipe } => listener.on_final_rating(rating, swipe),
                RatingEvent::Cancel => listener.on_cancel_rating(),
            }
        }

        match outcome.targets {
            TargetChange::Keep => {}
            TargetChange::Focus(index) => {
                self.animator.focus(index);
            }
            TargetChange::Reset => {
                self.animator.reset_targets();
            }
        }

        if let Some(generation) = outcome.settle {
            let due_ms = now_ms.saturating_add(self.timing.settle_delay_ms);
            self.scheduler.schedule(due_ms, Task::Settle { generation });
        }
    }

    /// Arms the animation tick unless it is already armed or nothing moves.
    fn ensure_animating(&mut self, now_ms: u64) {
        if self.animation.is_some() || self.animator.is_at_rest() {
            return;
        }
        self.animator.restart(now_ms);
        self.animation = Some(self.scheduler.schedule(now_ms, Task::AnimationTick));
        debug!(now_ms, "size animation started");
    }

    fn run_animation_tick(&mut self, token: TaskToken, now_ms: u64) {
        if self.animation != Some(token) {
            return;
        }

        if let TickOutcome::Advanced { .. } = self.animator.tick(now_ms) {
            trace!(now_ms, sizes = ?self.animator.current(), "size animation tick");
            self.relayout();
            self.request_redraw();
        }

        if self.animator.is_at_rest() {
            self.animation = None;
            debug!(now_ms, "size animation at rest");
        } else {
            self.animation = Some(self.scheduler.schedule(now_ms, Task::AnimationTick));
        }
    }
}

impl Widget for StarBar {
    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if !self.is_enabled() {
            return false;
        }

        let now_ms = event.time_ms;
        let outcome = match event.action {
            PointerAction::Down => {
                let accepted = self
                    .listener
                    .as_mut()
                    .map_or(true, |listener| listener.on_start_rating());
                self.gesture.press(event.x, self.viewport, now_ms, accepted)
            }
            PointerAction::Move => self.gesture.move_to(event.x, self.viewport),
            PointerAction::Up => self.gesture.release(event.x, event.y, self.viewport, now_ms),
            PointerAction::Cancel => self.gesture.cancel(),
        };

        self.apply(outcome, now_ms);
        self.request_redraw();
        self.ensure_animating(now_ms);
        true
    }

    fn advance(&mut self, now_ms: u64) {
        for (token, task) in self.scheduler.take_due(now_ms) {
            match task {
                Task::AnimationTick => self.run_animation_tick(token, now_ms),
                Task::Settle { generation } => {
                    let outcome = self.gesture.settle(generation);
                    if outcome != GestureOutcome::NONE {
                        self.apply(outcome, now_ms);
                        self.request_redraw();
                        self.ensure_animating(now_ms);
                    }
                }
            }
        }
    }

    fn next_wakeup(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    fn take_redraw_request(&mut self) -> bool {
        self.flags.take(WidgetFlags::DIRTY_RENDER)
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        self.frame().render(commands);
    }

    fn measure(&self, available_width: f32) -> (f32, f32) {
        let sprite = self.assets.sprite(SpriteKey::Neutral);
        (available_width, measured_height(sprite.height))
    }
}

impl fmt::Debug for StarBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarBar")
            .field("flags", &self.flags)
            .field("viewport", &self.viewport)
            .field("phase", &self.gesture.phase())
            .field("sizes", self.animator.current())
            .field("ranges", &self.ranges)
            .field("animating", &self.animation.is_some())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
