//! UI events
//!
//! Events fed into the [`crate::App`] state machine from terminal input and
//! completed network effects. All events arrive on one queue and are
//! processed strictly in arrival order.

use parley_api::{Session, User};

use crate::input::KeyInput;

/// Events processed by the [`crate::App`] state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A login submission succeeded. Global interrupt: switches the active
    /// view to the request menu regardless of where the app currently is.
    LoginSucceeded {
        /// Token pair and user snapshot from the backend.
        session: Session,
    },

    /// A login submission failed (bad credentials, transport, or decode).
    LoginFailed {
        /// Error text shown inline on the login form.
        message: String,
    },

    /// The input prompt collected a value. Emitted via
    /// [`crate::AppAction::Dispatch`] on a successful transform.
    InputCollected {
        /// The transformed value.
        value: String,
    },

    /// Completion of a list-users fetch.
    UsersLoaded {
        /// The user list, or an error string to show in the response buffer.
        result: Result<Vec<User>, String>,
    },

    /// Completion of a user-by-id fetch.
    UserLoaded {
        /// The user, or an error string to show in the response buffer.
        result: Result<User, String>,
    },
}
