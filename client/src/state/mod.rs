//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `form`, `upload`, `ui`) so pages
//! and components depend on small focused models. Everything here is
//! in-memory and resets on reload.

pub mod form;
pub mod session;
pub mod ui;
pub mod upload;
