//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, landing sections and form controls
//! while reading shared state from Leptos context providers.

pub mod auth_card;
pub mod button;
pub mod dropzone;
pub mod features;
pub mod footer;
pub mod hero;
pub mod input;
pub mod navbar;
