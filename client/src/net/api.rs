//! Collaborator stubs for authentication and image analysis.
//!
//! Neither service exists yet. `login` synthesizes a user from the email
//! address and `analyze_image` resolves after a fixed delay. The signatures
//! are the contract a real backend has to satisfy.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s; pages collapse them into one user-facing
//! message and log the cause.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{Role, User};
use crate::consts::ANALYSIS_DELAY;
use crate::state::upload::Preview;
use crate::util::timer;

/// Failure reported by the authentication collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Failure reported by the analysis collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("unsupported image format: {0:?}")]
    UnsupportedFormat(String),
    #[error("analysis service unavailable")]
    ServiceUnavailable,
    #[error("analysis timed out after {0:?}")]
    Timeout(Duration),
}

/// Derive a display name from the local part of an email address.
///
/// `jane.doe@x.org` becomes `Jane Doe`. Falls back to the trimmed input
/// when there is no usable local part.
fn display_name_from_email(email: &str) -> String {
    let email = email.trim();
    let local = email.split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect();
    if words.is_empty() { email.to_owned() } else { words.join(" ") }
}

fn synthesize_user(email: &str) -> User {
    User {
        id: uuid::Uuid::new_v4().to_string(),
        name: display_name_from_email(email),
        email: email.trim().to_owned(),
        role: Role::default(),
    }
}

/// Authenticate with email and password.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] for a blank email or empty
/// password. Any other input is accepted.
pub async fn login(email: &str, password: &str) -> Result<User, AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }
    let user = synthesize_user(email);
    #[cfg(feature = "hydrate")]
    log::info!("signed in {} as {}", user.email, user.id);
    Ok(user)
}

/// End the collaborator-side session. The stub keeps no state.
pub fn logout() {
    #[cfg(feature = "hydrate")]
    log::info!("signed out");
}

/// MIME type embedded in a `data:` URL, if present.
fn data_url_mime(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let end = rest.find([';', ',']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Submit a previewed image for analysis.
///
/// Simulated: waits [`crate::consts::ANALYSIS_DELAY`], then succeeds.
/// Produces no result payload.
///
/// # Errors
///
/// Returns [`AnalysisError::UnsupportedFormat`] when the preview does not
/// carry an image data URL.
pub async fn analyze_image(preview: &Preview) -> Result<(), AnalysisError> {
    let mime = data_url_mime(&preview.data_url).unwrap_or_default();
    if !mime.starts_with("image/") {
        return Err(AnalysisError::UnsupportedFormat(mime.to_owned()));
    }
    #[cfg(feature = "hydrate")]
    log::info!("analyzing {} ({} bytes)", preview.file.name, preview.file.size);
    timer::sleep(ANALYSIS_DELAY).await;
    Ok(())
}
