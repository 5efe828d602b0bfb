//! Session state: which user, if any, is signed in.
//!
//! DESIGN
//! ======
//! `App` creates exactly one [`Session`] and provides it through context.
//! It starts with no user and is never persisted, so a page reload signs
//! the user out. Components reach it with [`use_session`] instead of a
//! global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, AuthError};
use crate::net::types::User;

/// Plain session data held inside the reactive [`Session`] handle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Copyable reactive handle to the session.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an anonymous session.
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Full session data, tracked.
    pub fn get(self) -> SessionState {
        self.state.get()
    }

    /// Current user, tracked.
    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Whether a user is signed in, tracked.
    pub fn is_authenticated(self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Snapshot of the session without subscribing the caller.
    pub fn snapshot(self) -> SessionState {
        self.state.get_untracked()
    }

    /// Authenticate through the collaborator and store the returned user.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's [`AuthError`]; the session is left
    /// untouched in that case.
    pub async fn login(self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = api::login(email, password).await?;
        self.state.update(|s| s.sign_in(user));
        Ok(())
    }

    /// Clear the user synchronously.
    pub fn logout(self) {
        api::logout();
        self.state.update(SessionState::sign_out);
    }
}

/// Fetch the session provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
