use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised around the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `ToggleSavedQuestion` was dispatched while nobody is logged in.
    /// This is a caller bug; the store rejects the intent untouched.
    #[error("Cannot update saved questions: no active session")]
    NoActiveSession,

    #[error("Persisted profile is not valid JSON: {0}")]
    MalformedProfile(#[source] serde_json::Error),

    #[error("Action '{kind}' carries an invalid payload: {source}")]
    MalformedAction {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
