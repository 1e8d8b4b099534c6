//! Core widget types and traits.

use crate::input::PointerEvent;
use crate::render::RenderCommand;

/// Widget state flags (bitfield for efficiency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is enabled (can receive input).
    pub const ENABLED: u32 = 1 << 0;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 1;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::ENABLED | Self::DIRTY_RENDER);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Clears a flag and reports whether it was set.
    #[inline]
    pub fn take(&mut self, flag: u32) -> bool {
        let was_set = self.has(flag);
        self.clear(flag);
        was_set
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Base trait for host-driven widgets.
///
/// The host feeds pointer events, advances time once per frame, and renders
/// whenever a redraw was requested. All calls happen on one thread.
pub trait Widget {
    /// Returns the widget's flags.
    fn flags(&self) -> WidgetFlags;

    /// Handles one pointer event. Returns false if the event was ignored.
    fn handle_pointer(&mut self, event: &PointerEvent) -> bool;

    /// Runs deferred work due at `now_ms`.
    fn advance(&mut self, now_ms: u64);

    /// Earliest time the host must call [`Widget::advance`] again.
    fn next_wakeup(&self) -> Option<u64>;

    /// Returns true once per requested redraw.
    fn take_redraw_request(&mut self) -> bool;

    /// Appends render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the size this widget wants within `available_width`.
    fn measure(&self, available_width: f32) -> (f32, f32);
}
