use super::*;

// =============================================================
// verify
// =============================================================

#[test]
fn admin_credentials_verify() {
    let user = MockCredentials.verify("admin", "admin").unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "admin");
    assert_eq!(user.email, "admin@example.com");
    assert_eq!(user.role, "admin");
}

#[test]
fn wrong_password_is_rejected() {
    assert!(MockCredentials.verify("admin", "hunter2").is_none());
}

#[test]
fn unknown_user_is_rejected() {
    assert!(MockCredentials.verify("alice", "admin").is_none());
}

#[test]
fn credentials_are_case_sensitive() {
    assert!(MockCredentials.verify("Admin", "admin").is_none());
    assert!(MockCredentials.verify("admin", "ADMIN").is_none());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_mints_regular_user() {
    let user = MockCredentials.register("alice", "alice@example.com", 1_700_000_000);
    assert_eq!(user.id, 1_700_000_000);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, "user");
}

#[test]
fn registered_user_is_not_admin() {
    let user = MockCredentials.register("bob", "bob@example.com", 7);
    assert_ne!(user.role, "admin");
}
