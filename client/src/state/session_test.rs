use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::types::Role;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@clinic.org".to_owned(),
        role: Role::Dermatologist,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn sign_in_then_sign_out() {
    let mut state = SessionState::default();
    state.sign_in(make_user());
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));

    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

// =============================================================
// Session handle
// =============================================================

#[test]
fn session_starts_anonymous() {
    Owner::new().with(|| {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    });
}

#[test]
fn login_populates_user() {
    Owner::new().with(|| {
        let session = Session::new();
        block_on(session.login("ada@clinic.org", "correct horse")).unwrap();
        assert!(session.is_authenticated());
        let user = session.user().unwrap();
        assert_eq!(user.email, "ada@clinic.org");
        assert_eq!(user.role, Role::Dermatologist);
    });
}

#[test]
fn failed_login_leaves_session_anonymous() {
    Owner::new().with(|| {
        let session = Session::new();
        assert_eq!(block_on(session.login("", "pw")), Err(AuthError::InvalidCredentials));
        assert!(!session.snapshot().is_authenticated());
    });
}

#[test]
fn logout_clears_user() {
    Owner::new().with(|| {
        let session = Session::new();
        block_on(session.login("ada@clinic.org", "correct horse")).unwrap();
        session.logout();
        assert_eq!(session.snapshot(), SessionState::default());
    });
}

#[test]
fn copies_share_state() {
    Owner::new().with(|| {
        let session = Session::new();
        let copy = session;
        block_on(copy.login("ada@clinic.org", "pw")).unwrap();
        assert!(session.is_authenticated());
    });
}
