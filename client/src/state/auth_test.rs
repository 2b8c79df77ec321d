use super::*;

fn admin_user() -> SessionUser {
    SessionUser {
        id: 1,
        username: "admin".to_owned(),
        email: "admin@example.com".to_owned(),
        role: "admin".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

// =============================================================
// Session queries
// =============================================================

#[test]
fn signed_in_is_authenticated() {
    let state = AuthState::signed_in(admin_user(), mint_token());
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn admin_role_is_detected() {
    let state = AuthState::signed_in(admin_user(), mint_token());
    assert!(state.is_admin());
}

#[test]
fn regular_user_is_not_admin() {
    let mut user = admin_user();
    user.role = "user".to_owned();
    let state = AuthState::signed_in(user, mint_token());
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn user_without_token_is_not_authenticated() {
    let state = AuthState { user: Some(admin_user()), token: None, loading: false };
    assert!(!state.is_authenticated());
}

// =============================================================
// Tokens
// =============================================================

#[test]
fn tokens_carry_the_mock_prefix() {
    assert!(mint_token().starts_with("mock-jwt-token-"));
}

#[test]
fn tokens_are_unique_per_session() {
    assert_ne!(mint_token(), mint_token());
}

// =============================================================
// SessionUser serde
// =============================================================

#[test]
fn session_user_round_trips() {
    let user = admin_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: SessionUser = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}
