//! Authentication session state.
//!
//! DESIGN
//! ======
//! The session is two localStorage blobs (token + user record) restored once
//! at startup. Credential checking itself lives behind the
//! [`crate::util::credentials::CredentialStore`] port; this module only owns
//! the resulting session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::storage;

/// Storage key for the session token blob.
pub const TOKEN_STORAGE_KEY: &str = "filosharp_token";

/// Storage key for the session user blob.
pub const USER_STORAGE_KEY: &str = "filosharp_user";

/// The signed-in user record persisted alongside the token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// `"admin"` unlocks the admin routes; anything else is a regular user.
    pub role: String,
}

/// Authentication state tracking the current user, token, and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// A freshly signed-in session.
    #[must_use]
    pub fn signed_in(user: SessionUser, token: String) -> Self {
        Self { user: Some(user), token: Some(token), loading: false }
    }

    /// Whether a complete session (user and token) is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Whether the session belongs to an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == "admin")
    }
}

/// Mint a mock bearer token for a fresh session.
#[must_use]
pub fn mint_token() -> String {
    format!("mock-jwt-token-{}", Uuid::new_v4())
}

/// Restore a persisted session. Absent or malformed blobs mean signed out;
/// both halves must be present for the session to count.
#[must_use]
pub fn load_session() -> AuthState {
    let token: Option<String> = storage::load_json(TOKEN_STORAGE_KEY);
    let user: Option<SessionUser> = storage::load_json(USER_STORAGE_KEY);
    match (token, user) {
        (Some(token), Some(user)) => AuthState::signed_in(user, token),
        _ => AuthState::default(),
    }
}

/// Persist the session after login or registration.
pub fn save_session(state: &AuthState) {
    if let (Some(token), Some(user)) = (&state.token, &state.user) {
        storage::save_json(TOKEN_STORAGE_KEY, token);
        storage::save_json(USER_STORAGE_KEY, user);
    }
}

/// Drop the persisted session on logout.
pub fn clear_session() {
    storage::remove(TOKEN_STORAGE_KEY);
    storage::remove(USER_STORAGE_KEY);
}
