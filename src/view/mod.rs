//! Transient view state: responsive breakpoint and theme preference.

mod controller;
mod theme;
mod viewport;

pub use controller::{RootClassList, ThemeTarget, ViewState, ViewStateController, DARK_CLASS};
pub use theme::{Palette, ThemePreference};
pub use viewport::{is_compact_width, ListenerId, Viewport, COMPACT_BREAKPOINT};
