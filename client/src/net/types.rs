//! Domain DTOs shared by the session, the collaborator stubs and the pages.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so these types stay wire-compatible
//! with whatever real authentication and analysis services replace the stubs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Professional role collected at registration.
///
/// Purely descriptive: no access decision is made from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Dermatologist,
    Researcher,
    Admin,
}

impl Role {
    /// Roles offered by the registration form. `Admin` is never self-selected.
    pub const SELECTABLE: [Role; 2] = [Role::Dermatologist, Role::Researcher];

    /// Stable lowercase identifier used for form values and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dermatologist => "dermatologist",
            Self::Researcher => "researcher",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dermatologist => "Dermatologist",
            Self::Researcher => "Researcher",
            Self::Admin => "Admin",
        }
    }

    /// Parse a form value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dermatologist" => Some(Self::Dermatologist),
            "researcher" => Some(Self::Researcher),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An authenticated user held by the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Professional role.
    #[serde(default)]
    pub role: Role,
}

/// Outcome of analyzing one uploaded image.
///
/// Declared for the results view; the simulated analysis never produces one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Unique result identifier (UUID string).
    pub id: String,
    /// Location of the analyzed image.
    pub image_url: String,
    /// Free-text diagnosis.
    pub diagnosis: String,
    /// Model confidence in `0.0..=1.0`.
    pub confidence_score: f64,
    /// Upload timestamp as an ISO-8601 string.
    pub upload_date: String,
    /// Owning user (UUID string).
    pub user_id: String,
}
