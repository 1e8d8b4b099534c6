//! Widget system for UI components.

mod core;
mod star_bar;

pub use self::core::{Widget, WidgetFlags};
pub use star_bar::StarBar;
