//! Transient per-page form state.
//!
//! DESIGN
//! ======
//! Values and errors are both keyed by field name so one model serves the
//! login and registration pages. The reserved [`FORM_ERROR`] key carries
//! the single submission-level message.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// Validation output: field name to message. Empty means valid.
pub type FieldErrors = BTreeMap<String, String>;

/// Key for the form-level submission error.
pub const FORM_ERROR: &str = "form";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, String>,
    errors: FieldErrors,
    /// A submission is in flight; the submit control is disabled.
    pub loading: bool,
}

impl FormState {
    /// Build a form pre-filled with `(field, value)` pairs.
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            ..Self::default()
        }
    }

    /// Current value of `field`; empty when never set.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Store a new value and drop any error shown for that field.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_owned(), value.into());
        self.errors.remove(field);
    }

    /// Inline message for `field`, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str).filter(|m| !m.is_empty())
    }

    /// Submission-level message, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.error(FORM_ERROR)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|m| !m.is_empty())
    }

    /// Replace the error set with a validation result and start submitting
    /// when it is clean.
    ///
    /// Returns `false` without touching anything while a submission is
    /// already in flight, and `false` after recording errors when
    /// validation failed. Only a `true` return may call the session.
    pub fn begin_submit(&mut self, errors: FieldErrors) -> bool {
        if self.loading {
            return false;
        }
        self.errors = errors;
        if self.has_errors() {
            return false;
        }
        self.loading = true;
        true
    }

    /// End the in-flight submission. A failure message replaces every
    /// other error.
    pub fn finish_submit(&mut self, failure: Option<&str>) {
        self.loading = false;
        if let Some(message) = failure {
            self.errors = FieldErrors::from([(FORM_ERROR.to_owned(), message.to_owned())]);
        }
    }
}
