//! Wire types for the backend API.
//!
//! Field names follow the backend's JSON contract verbatim; Rust-side names
//! are snake_case with serde renames where the two diverge.

use serde::{Deserialize, Serialize};

/// A user record as the backend serializes it.
///
/// List and lookup responses include the stored password hash; the client
/// deserializes the field for contract fidelity but never displays it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Stable user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Stored password hash. Never rendered.
    #[serde(default)]
    pub password: String,
    /// Presence flag maintained by the backend.
    pub online: bool,
    /// Channel memberships. `null` on the wire when the user has none.
    #[serde(default)]
    pub channels: Option<Vec<String>>,
    /// Creation time (unix seconds).
    pub created: i64,
    /// Last-update time (unix seconds).
    pub updated: i64,
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// Login email address.
    pub email: &'a str,
    /// Cleartext password; only ever sent to the backend.
    pub password: &'a str,
}

/// Successful response of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Human-readable status message from the backend.
    pub message: String,
    /// Short-lived access token.
    pub token: String,
    /// Long-lived refresh token.
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    /// Snapshot of the authenticated user.
    pub user: User,
}

/// An authenticated session.
///
/// Produced exactly once per successful login and owned by the request menu
/// for the remainder of the process lifetime. No renewal loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Access token presented as `Authorization: Bearer`.
    pub token: String,
    /// Refresh token. Held for display; the client never exchanges it.
    pub refresh_token: String,
    /// The authenticated user as of login time.
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            refresh_token: response.refresh_token,
            user: response.user,
        }
    }
}
