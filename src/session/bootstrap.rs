use crate::session::error::SessionError;
use crate::session::intent::SessionIntent;
use crate::session::store::SessionStore;
use crate::session::user::SessionPayload;
use crate::storage::{KeyValueStore, PROFILE_KEY};

/// Load the persisted profile into `store`.
///
/// Always dispatches `SetCurrentUser`, overwriting any in-memory session.
/// A missing `Profile` key (or a stored `null`) logs the user out. Any JSON
/// object restores a session, even one without a `result` user.
///
/// # Errors
/// - [`SessionError::Storage`] if the profile cannot be read
/// - [`SessionError::MalformedProfile`] if the stored value is not a valid
///   session payload; nothing is dispatched in that case
pub fn bootstrap_session(
    storage: &dyn KeyValueStore,
    store: &SessionStore,
) -> Result<(), SessionError> {
    let payload = match storage.get(PROFILE_KEY)? {
        Some(raw) => serde_json::from_str::<Option<SessionPayload>>(&raw)
            .map_err(SessionError::MalformedProfile)?,
        None => None,
    };

    tracing::debug!(present = payload.is_some(), "restoring session from storage");
    store.dispatch(SessionIntent::SetCurrentUser(payload))
}
