//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes that have no in-place login prompt apply identical
//! unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::session::{Session, SessionState};

/// Whether a visitor on `path` with this session must be sent to login.
pub fn should_redirect_unauth(state: &SessionState, path: &str) -> bool {
    !state.is_authenticated() && routes::is_protected(path)
}

/// Redirect to `/login` whenever the session has no user on a protected `path`.
pub fn install_unauth_redirect<F>(session: Session, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get(), path) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}
