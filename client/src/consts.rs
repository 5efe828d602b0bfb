//! Compile-time client configuration.

use std::time::Duration;

/// Product name shown in the navbar, footer and page title.
pub const APP_NAME: &str = "MelanomaScan";

/// How long the simulated analysis call takes before resolving.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

/// MIME types the upload workflow accepts.
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// File extensions accepted when the browser reports no MIME type.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png"];

/// Value for the file input's `accept` attribute.
pub const FILE_INPUT_ACCEPT: &str = "image/jpeg,image/png,.jpeg,.jpg,.png";

/// Minimum password length enforced on registration.
pub const MIN_PASSWORD_LEN: usize = 8;
