use super::*;

fn errors(pairs: &[(&str, &str)]) -> FieldErrors {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================
// Values
// =============================================================

#[test]
fn unset_value_is_empty() {
    let form = FormState::default();
    assert_eq!(form.value("email"), "");
    assert!(!form.loading);
}

#[test]
fn with_values_prefills() {
    let form = FormState::with_values(&[("role", "dermatologist")]);
    assert_eq!(form.value("role"), "dermatologist");
}

#[test]
fn set_value_clears_only_that_fields_error() {
    let mut form = FormState::default();
    assert!(!form.begin_submit(errors(&[
        ("email", "Email is required"),
        ("password", "Password is required"),
    ])));

    form.set_value("email", "a@b.co");
    assert_eq!(form.value("email"), "a@b.co");
    assert_eq!(form.error("email"), None);
    assert_eq!(form.error("password"), Some("Password is required"));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_with_errors_does_not_start_loading() {
    let mut form = FormState::default();
    assert!(!form.begin_submit(errors(&[("email", "Email is required")])));
    assert!(!form.loading);
    assert!(form.has_errors());
}

#[test]
fn begin_submit_clean_starts_loading_and_clears_stale_errors() {
    let mut form = FormState::default();
    form.finish_submit(Some("Invalid email or password"));
    assert!(form.begin_submit(FieldErrors::new()));
    assert!(form.loading);
    assert_eq!(form.form_error(), None);
}

#[test]
fn second_submit_while_loading_is_ignored() {
    let mut form = FormState::default();
    assert!(form.begin_submit(FieldErrors::new()));
    assert!(!form.begin_submit(FieldErrors::new()));
    assert!(!form.begin_submit(errors(&[("email", "Email is required")])));
    assert_eq!(form.error("email"), None);
}

#[test]
fn finish_submit_success_stops_loading() {
    let mut form = FormState::default();
    assert!(form.begin_submit(FieldErrors::new()));
    form.finish_submit(None);
    assert!(!form.loading);
    assert!(!form.has_errors());
}

#[test]
fn finish_submit_failure_sets_single_form_error() {
    let mut form = FormState::default();
    assert!(form.begin_submit(FieldErrors::new()));
    form.finish_submit(Some("Registration failed. Please try again."));
    assert!(!form.loading);
    assert_eq!(form.form_error(), Some("Registration failed. Please try again."));
    assert_eq!(form.error("email"), None);
}

#[test]
fn empty_messages_do_not_count_as_errors() {
    let mut form = FormState::default();
    assert!(form.begin_submit(errors(&[("email", "")])));
    assert_eq!(form.error("email"), None);
}
