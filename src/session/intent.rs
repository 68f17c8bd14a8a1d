use serde::Deserialize;
use serde_json::Value;

use crate::mvi::Intent;
use crate::session::error::SessionError;
use crate::session::user::SessionPayload;

/// Wire name of the action that replaces the whole session.
pub const FETCH_CURRENT_USER: &str = "FETCH_CURRENT_USER";

/// Wire name of the action that replaces the saved-question list.
pub const TOGGLE_SAVE_QUESTION: &str = "TOGGLE_SAVE_QUESTION";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Replace the entire session. `None` means nobody is logged in.
    SetCurrentUser(Option<SessionPayload>),
    /// Replace `result.saved_questions` wholesale. Requires a session.
    ToggleSavedQuestion { saved_questions: Vec<String> },
    /// Any action this store does not handle.
    Ignored,
}

impl Intent for SessionIntent {}

/// An untyped `{ "type": ..., "payload": ... }` action as emitted by
/// other parts of the application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedQuestionsPayload {
    saved_questions: Vec<String>,
}

impl SessionIntent {
    /// Decode an untyped action. Unknown action types map to
    /// [`SessionIntent::Ignored`]; known types with a payload of the wrong
    /// shape are rejected.
    pub fn from_action(action: Action) -> Result<Self, SessionError> {
        let Action { kind, payload } = action;
        let decoded = match kind.as_str() {
            FETCH_CURRENT_USER => {
                serde_json::from_value::<Option<SessionPayload>>(payload)
                    .map(SessionIntent::SetCurrentUser)
            }
            TOGGLE_SAVE_QUESTION => serde_json::from_value::<SavedQuestionsPayload>(payload)
                .map(|p| SessionIntent::ToggleSavedQuestion {
                    saved_questions: p.saved_questions,
                }),
            _ => Ok(SessionIntent::Ignored),
        };
        decoded.map_err(|source| SessionError::MalformedAction { kind, source })
    }

    /// Whether the intent can only be applied to a populated session.
    pub fn requires_session(&self) -> bool {
        matches!(self, SessionIntent::ToggleSavedQuestion { .. })
    }
}
