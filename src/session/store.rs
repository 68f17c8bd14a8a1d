//! Session container.
//!
//! One `SessionStore` is created per application instance and handed to
//! whatever needs it; clones share the same state. Listeners are invoked
//! after the state lock is released, so a listener may dispatch again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::mvi::Reducer;
use crate::session::error::SessionError;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::SessionState;
use crate::session::user::SessionUser;

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct StoreInner {
    state: Mutex<SessionState>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_state(SessionState::empty())
    }

    pub fn with_state(state: SessionState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(state),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.state.lock().clone()
    }

    /// The logged-in user, or `None` when nobody is.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.inner.state.lock().user().cloned()
    }

    /// Run `intent` through [`SessionReducer`] and notify listeners if the
    /// state changed.
    ///
    /// # Errors
    /// [`SessionError::NoActiveSession`] if the intent needs a session and
    /// none is present. The state is left untouched in that case.
    pub fn dispatch(&self, intent: SessionIntent) -> Result<(), SessionError> {
        let changed = {
            let mut state = self.inner.state.lock();
            if intent.requires_session() && !state.is_present() {
                tracing::error!(?intent, "session intent dispatched without a session");
                return Err(SessionError::NoActiveSession);
            }

            let previous = std::mem::take(&mut *state);
            let before = previous.clone();
            *state = SessionReducer::reduce(previous, intent);
            if *state == before {
                None
            } else {
                tracing::debug!(
                    present = state.is_present(),
                    was_present = before.is_present(),
                    "session state changed"
                );
                Some(state.clone())
            }
        };

        if let Some(state) = changed {
            self.notify(&state);
        }
        Ok(())
    }

    /// Register a listener called with the new state after every change.
    ///
    /// The listener stays registered until the returned subscription is
    /// unsubscribed or dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> StoreSubscription
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        StoreSubscription {
            store: Arc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    fn notify(&self, state: &SessionState) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a store listener. Released exactly once, either explicitly
/// via [`StoreSubscription::unsubscribe`] or on drop.
pub struct StoreSubscription {
    store: Weak<StoreInner>,
    id: Option<u64>,
}

impl StoreSubscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(store) = self.store.upgrade() {
            store.listeners.lock().retain(|(other, _)| *other != id);
        }
    }
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::user::SessionPayload;
    use std::sync::atomic::AtomicUsize;

    fn logged_in() -> SessionPayload {
        SessionPayload::new(SessionUser {
            id: "u1".to_string(),
            first_name: "Ada".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn toggle_without_session_is_rejected() {
        let store = SessionStore::new();
        let err = store
            .dispatch(SessionIntent::ToggleSavedQuestion {
                saved_questions: vec!["q1".to_string()],
            })
            .unwrap_err();
        assert!(matches!(err, SessionError::NoActiveSession));
        assert!(!store.state().is_present());
    }

    #[test]
    fn listeners_only_see_changes() {
        let store = SessionStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store
            .dispatch(SessionIntent::SetCurrentUser(Some(logged_in())))
            .unwrap();
        store.dispatch(SessionIntent::Ignored).unwrap();
        store
            .dispatch(SessionIntent::SetCurrentUser(Some(logged_in())))
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let store = SessionStore::new();
        let sub = store.subscribe(|_| {});
        let other = store.subscribe(|_| {});
        assert_eq!(store.listener_count(), 2);

        sub.unsubscribe();
        assert_eq!(store.listener_count(), 1);

        drop(other);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn listener_may_dispatch_again() {
        let store = SessionStore::new();
        let inner = store.clone();
        let _sub = store.subscribe(move |state| {
            if !state.is_present() {
                return;
            }
            if state.user().is_some_and(|u| u.saved_questions.is_empty()) {
                inner
                    .dispatch(SessionIntent::ToggleSavedQuestion {
                        saved_questions: vec!["q1".to_string()],
                    })
                    .unwrap();
            }
        });

        store
            .dispatch(SessionIntent::SetCurrentUser(Some(logged_in())))
            .unwrap();

        assert_eq!(
            store.current_user().unwrap().saved_questions,
            vec!["q1".to_string()]
        );
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = SessionStore::new();
        let sub = store.subscribe(|_| {});
        drop(store);
        sub.unsubscribe();
    }
}
