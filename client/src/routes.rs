//! Client-side navigation targets.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const UPLOAD: &str = "/upload";
pub const DASHBOARD: &str = "/dashboard";
pub const PROFILE: &str = "/profile";
pub const RESULTS: &str = "/results";

/// Routes whose main content requires a logged-in user.
pub const PROTECTED: &[&str] = &[UPLOAD, DASHBOARD, PROFILE, RESULTS];

/// Whether `path` points at a route that requires a logged-in user.
///
/// Trailing slashes are ignored so `/upload/` is treated like `/upload`.
pub fn is_protected(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    PROTECTED.iter().any(|route| *route == trimmed)
}
