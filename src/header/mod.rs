//! The persistent top navigation bar.
//!
//! [`TopMenu`] ties the pieces together for one mounted header:
//!
//! ```text
//! activate():  view state ──→ guard ──→ bootstrap
//! deactivate(): resize listener and store subscription released
//! ```
//!
//! The guard is attached before the bootstrap runs, so it sees the empty
//! store first and may redirect once before the restored session arrives.

mod model;
mod page;
mod widget;

use std::sync::Arc;

use ratatui::layout::Rect;

pub use model::{
    display_name, HeaderModel, HeaderWidth, LeftSide, ProfileButton, FIXED_WIDTH_PX,
    NOTIFICATIONS_ROUTE,
};
pub use page::{PageContext, PageKey};

use crate::config::AppConfig;
use crate::session::{
    bootstrap_session, Navigator, SessionError, SessionGuard, SessionIntent, SessionStore,
    SessionUser,
};
use crate::storage::KeyValueStore;
use crate::view::{ThemePreference, ThemeTarget, ViewState, ViewStateController, Viewport};

/// Collaborators owned by the host application.
#[derive(Clone)]
pub struct TopMenuDeps {
    pub storage: Arc<dyn KeyValueStore>,
    pub session: SessionStore,
    pub navigator: Arc<dyn Navigator>,
    pub theme_target: Arc<dyn ThemeTarget>,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopMenuOptions {
    pub compact_breakpoint: u32,
    /// Viewport pixels per terminal column.
    pub cell_width: u32,
    pub login_route: String,
}

impl From<&AppConfig> for TopMenuOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            compact_breakpoint: config.viewport.compact_breakpoint,
            cell_width: config.viewport.cell_width,
            login_route: config.routes.login.clone(),
        }
    }
}

impl Default for TopMenuOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

pub struct TopMenu {
    page: PageContext,
    deps: TopMenuDeps,
    login_route: String,
    cell_width: u32,
    view: ViewStateController,
    guard: Option<SessionGuard>,
}

impl TopMenu {
    pub fn new(page: PageContext, deps: TopMenuDeps, options: TopMenuOptions) -> Self {
        let view = ViewStateController::new(
            Arc::clone(&deps.storage),
            Arc::clone(&deps.theme_target),
            options.compact_breakpoint,
        );
        Self {
            page,
            deps,
            login_route: options.login_route,
            cell_width: options.cell_width,
            view,
            guard: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }

    /// Mount the header: apply view state, attach the login guard, then
    /// restore the session from storage.
    ///
    /// View state and the guard stay active even when the bootstrap fails.
    /// Calling this on an active header does nothing.
    ///
    /// # Errors
    /// Any error from [`bootstrap_session`].
    pub fn activate(&mut self) -> Result<(), SessionError> {
        if self.is_active() {
            return Ok(());
        }

        tracing::debug!(page = %self.page.current, "activating top menu");
        self.view.activate(&self.deps.viewport);
        self.guard = Some(SessionGuard::attach(
            &self.deps.session,
            Arc::clone(&self.deps.navigator),
            self.login_route.clone(),
        ));

        bootstrap_session(self.deps.storage.as_ref(), &self.deps.session).inspect_err(|e| {
            tracing::error!(error = %e, "session bootstrap failed");
        })
    }

    /// Release the resize listener and the store subscription.
    pub fn deactivate(&mut self) {
        self.view.deactivate();
        if let Some(mut guard) = self.guard.take() {
            guard.detach();
        }
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.deps.session.current_user()
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn toggle_theme(&self) -> ThemePreference {
        self.view.toggle_theme()
    }

    /// Save or unsave `question_id` for the logged-in user.
    ///
    /// Returns whether the question is saved afterwards.
    ///
    /// # Errors
    /// [`SessionError::NoActiveSession`] when nobody is logged in.
    pub fn toggle_saved_question(&self, question_id: &str) -> Result<bool, SessionError> {
        let user = self.current_user().ok_or(SessionError::NoActiveSession)?;
        let saved_questions = user.toggled_saved_questions(question_id);
        let saved = saved_questions.iter().any(|id| id == question_id);
        self.deps
            .session
            .dispatch(SessionIntent::ToggleSavedQuestion { saved_questions })?;
        Ok(saved)
    }

    pub fn model(&self) -> HeaderModel {
        HeaderModel::derive(
            &self.page,
            self.current_user().as_ref(),
            self.view.state(),
        )
    }

    /// Part of the terminal `area` the header occupies for `model`.
    pub fn render_area(&self, model: &HeaderModel, area: Rect) -> Rect {
        model.area(area, self.cell_width)
    }
}

impl Drop for TopMenu {
    fn drop(&mut self) {
        self.deactivate();
    }
}
