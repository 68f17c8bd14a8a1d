use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetCurrentUser(payload) => SessionState::new(payload),
            SessionIntent::ToggleSavedQuestion { saved_questions } => match state.into_payload() {
                Some(mut payload) => {
                    payload.result.saved_questions = saved_questions;
                    SessionState::new(Some(payload))
                }
                // Rejected by SessionStore before it gets here; stay empty.
                None => SessionState::empty(),
            },
            SessionIntent::Ignored => state,
        }
    }
}
