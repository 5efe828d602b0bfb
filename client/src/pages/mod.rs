//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The login and registration pages share the submission
//! flow defined here: validate synchronously, authenticate asynchronously,
//! then report the next route.


pub mod home;
pub mod login;
pub mod placeholder;
pub mod register;
pub mod upload;

use leptos::prelude::*;

use crate::routes;
use crate::state::form::{FieldErrors, FormState};
use crate::state::session::Session;
use crate::util::lifetime::LifetimeToken;
use crate::util::validation::fields;

/// Email and password captured when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validate the form and, when clean, mark it loading and snapshot the
/// credentials. `None` means nothing may be sent to the session.
pub(crate) fn start_submission(
    form: RwSignal<FormState>,
    validate: fn(&FormState) -> FieldErrors,
) -> Option<Credentials> {
    let started = form
        .try_update(|f| {
            let errors = validate(f);
            f.begin_submit(errors)
        })
        .unwrap_or(false);
    if !started {
        return None;
    }
    Some(form.with_untracked(|f| Credentials {
        email: f.value(fields::EMAIL).to_owned(),
        password: f.value(fields::PASSWORD).to_owned(),
    }))
}

/// Sign in with `credentials` and settle the form.
///
/// Returns the route to navigate to on success. Any failure collapses into
/// `failure_message`. Nothing is written once `alive` is cancelled.
pub(crate) async fn finish_submission(
    session: Session,
    form: RwSignal<FormState>,
    alive: LifetimeToken,
    credentials: Credentials,
    failure_message: &'static str,
) -> Option<&'static str> {
    let outcome = session.login(&credentials.email, &credentials.password).await;
    if !alive.is_alive() {
        return None;
    }
    match outcome {
        Ok(()) => {
            form.update(|f| f.finish_submit(None));
            Some(routes::DASHBOARD)
        }
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("sign-in failed: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            form.update(|f| f.finish_submit(Some(failure_message)));
            None
        }
    }
}
