//! Collaborator boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the authentication and analysis calls (stubbed today) and
//! `types` defines the DTOs they exchange with the rest of the client.

pub mod api;
pub mod types;
