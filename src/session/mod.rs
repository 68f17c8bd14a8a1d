//! Current-user session: reducer, store container, bootstrap and guard.
//!
//! ```text
//! storage["Profile"] ──bootstrap──→ SetCurrentUser ──→ SessionStore ──→ SessionGuard
//!                                                          │                │
//!                                                    current_user()   navigate("/login")
//! ```

mod bootstrap;
mod error;
mod guard;
mod intent;
mod reducer;
mod state;
mod store;
mod user;

pub use bootstrap::bootstrap_session;
pub use error::SessionError;
pub use guard::{Navigator, SessionGuard};
pub use intent::{Action, SessionIntent, FETCH_CURRENT_USER, TOGGLE_SAVE_QUESTION};
pub use reducer::SessionReducer;
pub use state::SessionState;
pub use store::{SessionStore, StoreSubscription};
pub use user::{SessionPayload, SessionUser};
