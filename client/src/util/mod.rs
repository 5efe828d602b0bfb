//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure rules from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod file_read;
pub mod lifetime;
pub mod timer;
pub mod validation;
