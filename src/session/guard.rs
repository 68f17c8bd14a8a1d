//! Redirect to the login route whenever the session goes away.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::session::state::SessionState;
use crate::session::store::{SessionStore, StoreSubscription};

/// Outbound navigation, implemented by the hosting router.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Observes a [`SessionStore`] and navigates to the login route on every
/// present → absent transition.
///
/// The first observation counts as a transition from "unknown", so a guard
/// attached before bootstrap fires once for the initially empty store.
pub struct SessionGuard {
    subscription: Option<StoreSubscription>,
}

impl SessionGuard {
    pub fn attach(
        store: &SessionStore,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        let watcher = Arc::new(PresenceWatcher {
            last_present: Mutex::new(None),
            navigator,
            login_route: login_route.into(),
        });

        let listener = Arc::clone(&watcher);
        let subscription = store.subscribe(move |state| listener.observe(state));
        watcher.observe(&store.state());

        Self {
            subscription: Some(subscription),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop observing the store. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

struct PresenceWatcher {
    last_present: Mutex<Option<bool>>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl PresenceWatcher {
    fn observe(&self, state: &SessionState) {
        let present = state.is_present();
        let previous = self.last_present.lock().replace(present);
        if present || previous == Some(false) {
            return;
        }
        tracing::info!(route = %self.login_route, "no active session, redirecting");
        self.navigator.navigate(&self.login_route);
    }
}
