//! Responsive and theme state for the header.
//!
//! The controller reads the stored theme once at construction. While active
//! it owns exactly one resize listener on the [`Viewport`]; deactivation
//! (or drop) removes it.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{KeyValueStore, THEME_KEY};
use crate::view::theme::ThemePreference;
use crate::view::viewport::{is_compact_width, ListenerId, Viewport};

/// Class applied to the root presentation context in dark mode.
pub const DARK_CLASS: &str = "dark";

/// Root presentation context the theme class is applied to.
pub trait ThemeTarget: Send + Sync {
    fn set_class(&self, class: &str, enabled: bool);
}

/// Plain class set standing in for a document root.
#[derive(Debug, Default)]
pub struct RootClassList {
    classes: Mutex<BTreeSet<String>>,
}

impl RootClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.lock().contains(class)
    }
}

impl ThemeTarget for RootClassList {
    fn set_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.lock();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub is_compact: bool,
    pub theme: ThemePreference,
}

pub struct ViewStateController {
    state: Arc<Mutex<ViewState>>,
    storage: Arc<dyn KeyValueStore>,
    target: Arc<dyn ThemeTarget>,
    breakpoint: u32,
    subscription: Option<(Viewport, ListenerId)>,
}

impl ViewStateController {
    /// Create a controller, reading the persisted theme.
    ///
    /// A missing, unknown, or unreadable value falls back to light. Nothing
    /// is written here.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        target: Arc<dyn ThemeTarget>,
        breakpoint: u32,
    ) -> Self {
        let theme = load_theme(storage.as_ref());
        Self {
            state: Arc::new(Mutex::new(ViewState {
                is_compact: false,
                theme,
            })),
            storage,
            target,
            breakpoint,
            subscription: None,
        }
    }

    pub fn state(&self) -> ViewState {
        *self.state.lock()
    }

    pub fn is_compact(&self) -> bool {
        self.state.lock().is_compact
    }

    pub fn theme(&self) -> ThemePreference {
        self.state.lock().theme
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Apply the current theme, start listening to `viewport` and compute
    /// `is_compact` from its current width.
    ///
    /// Activating an already active controller is a no-op.
    pub fn activate(&mut self, viewport: &Viewport) {
        if self.is_active() {
            return;
        }

        self.apply_theme(self.theme());

        let state = Arc::clone(&self.state);
        let breakpoint = self.breakpoint;
        let id = viewport.add_listener(move |width| {
            update_compact(&state, width, breakpoint);
        });
        self.subscription = Some((viewport.clone(), id));

        self.on_resize(viewport.width());
    }

    /// Remove the resize listener. Safe to call more than once.
    pub fn deactivate(&mut self) {
        if let Some((viewport, id)) = self.subscription.take() {
            viewport.remove_listener(id);
        }
    }

    /// Recompute `is_compact` for `width`.
    pub fn on_resize(&self, width: u32) {
        update_compact(&self.state, width, self.breakpoint);
    }

    /// Flip light/dark, then apply and persist the new value.
    pub fn toggle_theme(&self) -> ThemePreference {
        let theme = {
            let mut state = self.state.lock();
            state.theme = state.theme.toggled();
            state.theme
        };
        self.apply_theme(theme);
        theme
    }

    fn apply_theme(&self, theme: ThemePreference) {
        self.target.set_class(DARK_CLASS, theme.is_dark());
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, theme = theme.as_str(), "failed to persist theme");
        }
    }
}

impl Drop for ViewStateController {
    fn drop(&mut self) {
        self.deactivate();
    }
}

fn update_compact(state: &Mutex<ViewState>, width: u32, breakpoint: u32) {
    let compact = is_compact_width(width, breakpoint);
    let mut state = state.lock();
    if state.is_compact != compact {
        tracing::debug!(width, compact, "responsive mode changed");
    }
    state.is_compact = compact;
}

fn load_theme(storage: &dyn KeyValueStore) -> ThemePreference {
    match storage.get(THEME_KEY) {
        Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
            tracing::warn!(value = %value, "ignoring unknown stored theme");
            ThemePreference::default()
        }),
        Ok(None) => ThemePreference::default(),
        Err(e) => {
            tracing::warn!(error = %e, "theme storage unavailable, using default");
            ThemePreference::default()
        }
    }
}
