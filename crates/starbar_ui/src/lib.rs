//! # StarBar UI
//!
//! A touch rating bar: ten stars, three color tiers, one finger.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        STAR BAR PIPELINE                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  PointerEvent → Gesture → Target sizes → Animator → Geometry  │
//! │                    ↓                         ↑         ↓      │
//! │               Listener                  Scheduler   Render    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//!
//! Everything runs on the host's UI thread. The host feeds pointer events to
//! [`StarBar::handle_pointer`](widget::Widget::handle_pointer), calls
//! [`advance`](widget::Widget::advance) every frame (or at
//! [`next_wakeup`](widget::Widget::next_wakeup)), and renders whenever
//! [`take_redraw_request`](widget::Widget::take_redraw_request) says so.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod listener;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod style;
pub mod tier;
pub mod widget;

pub use animation::{SizeAnimator, TickOutcome};
pub use config::{StarBarConfig, TimingConfig};
pub use error::{StarBarError, StarBarResult};
pub use geometry::{ItemSlot, Point, Rect, Viewport};
pub use gesture::{GesturePhase, GestureTracker};
pub use input::{PointerAction, PointerEvent};
pub use listener::{ChannelListener, RatingEvent, RatingListener};
pub use render::{RenderCommand, StarFrame, StarInstance};
pub use resources::{SpriteKey, SpriteMetrics, StarAssets, StarResources};
pub use scheduler::{Scheduler, Task, TaskToken};
pub use style::{BarStyle, Color};
pub use tier::{RatingRanges, Tier};
pub use widget::{StarBar, Widget, WidgetFlags};
