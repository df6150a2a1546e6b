//! UI actions
//!
//! Actions produced by the state machines for the runtime to execute. The
//! network-bearing variants are the only suspension points in the client;
//! update never blocks on them.

use crate::event::AppEvent;

/// Actions produced by the [`crate::App`] state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Submit credentials via `POST /login`. Resolves to
    /// [`AppEvent::LoginSucceeded`] or [`AppEvent::LoginFailed`].
    SubmitLogin {
        /// Email address from the identifier widget.
        email: String,
        /// Cleartext password from the secret widget.
        password: String,
    },

    /// Fetch all users via `GET /api/users`. Resolves to
    /// [`AppEvent::UsersLoaded`].
    FetchUsers {
        /// Bearer token for the request.
        token: String,
    },

    /// Fetch one user via `GET /api/users/:id`. Resolves to
    /// [`AppEvent::UserLoaded`].
    FetchUser {
        /// Bearer token for the request.
        token: String,
        /// Collected user id.
        id: String,
    },

    /// Re-enter the update loop with an event, preserving arrival order.
    /// Used for cross-sub-model signals routed through the orchestrator.
    Dispatch(AppEvent),
}
