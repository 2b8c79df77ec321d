//! Credential verification port and its in-memory mock implementation.
//!
//! DESIGN
//! ======
//! Authentication in this storefront is a stand-in for a real verification
//! service. The trait keeps the login/register flows pluggable; the shipped
//! implementation accepts a single hardcoded admin credential pair and mints
//! regular users on registration, which is all the demo needs.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::state::auth::SessionUser;

/// Pluggable credential verification for login and registration.
pub trait CredentialStore {
    /// Verify a username/password pair, yielding the matching user on success.
    fn verify(&self, username: &str, password: &str) -> Option<SessionUser>;

    /// Register a new regular user. `id_seed` keeps the implementation free
    /// of wall-clock access; callers pass a timestamp or counter.
    fn register(&self, username: &str, email: &str, id_seed: i64) -> SessionUser;
}

/// The demo credential store: exactly `admin` / `admin` signs in, as the
/// site administrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentials;

impl CredentialStore for MockCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<SessionUser> {
        if username == "admin" && password == "admin" {
            return Some(SessionUser {
                id: 1,
                username: "admin".to_owned(),
                email: "admin@example.com".to_owned(),
                role: "admin".to_owned(),
            });
        }
        None
    }

    fn register(&self, username: &str, email: &str, id_seed: i64) -> SessionUser {
        SessionUser {
            id: id_seed,
            username: username.to_owned(),
            email: email.to_owned(),
            role: "user".to_owned(),
        }
    }
}
