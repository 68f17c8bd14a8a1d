use crate::mvi::UiState;
use crate::session::user::{SessionPayload, SessionUser};

/// Session held by the store: at most one payload, or nobody.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    payload: Option<SessionPayload>,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn new(payload: Option<SessionPayload>) -> Self {
        Self { payload }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&SessionPayload> {
        self.payload.as_ref()
    }

    /// The nested `result` user, if any.
    pub fn user(&self) -> Option<&SessionUser> {
        self.payload.as_ref().map(|p| &p.result)
    }

    pub fn into_payload(self) -> Option<SessionPayload> {
        self.payload
    }
}

impl From<Option<SessionPayload>> for SessionState {
    fn from(payload: Option<SessionPayload>) -> Self {
        Self::new(payload)
    }
}

impl From<SessionPayload> for SessionState {
    fn from(payload: SessionPayload) -> Self {
        Self::new(Some(payload))
    }
}
