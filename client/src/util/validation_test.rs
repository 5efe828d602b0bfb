use super::*;

fn login_form(email: &str, password: &str) -> FormState {
    FormState::with_values(&[(fields::EMAIL, email), (fields::PASSWORD, password)])
}

fn register_form(name: &str, email: &str, password: &str, confirm: &str) -> FormState {
    FormState::with_values(&[
        (fields::NAME, name),
        (fields::EMAIL, email),
        (fields::PASSWORD, password),
        (fields::CONFIRM_PASSWORD, confirm),
        (fields::ROLE, "dermatologist"),
    ])
}

fn error<'a>(errors: &'a FieldErrors, field: &str) -> Option<&'a str> {
    errors.get(field).map(String::as_str)
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    for email in ["a@b.c", "jane.doe@clinic.org", "x+tag@sub.domain.io", "a@@b.c"] {
        assert!(is_valid_email(email), "expected valid: {email:?}");
    }
}

#[test]
fn email_match_is_unanchored() {
    assert!(is_valid_email("contact: a@b.co please"));
    assert!(is_valid_email(" a@b.co "));
}

#[test]
fn email_rejects_malformed_addresses() {
    for email in ["", "plain", "@b.c", "a@", "a@b", "a@.c", "a@b.", "a @b.c", "a@ b.c", "a@b .c", "a@b. c"] {
        assert!(!is_valid_email(email), "expected invalid: {email:?}");
    }
}

#[test]
fn email_handles_non_ascii() {
    assert!(is_valid_email("zoë@exämple.de"));
    assert!(!is_valid_email("zoë@exämple"));
}

#[test]
fn byte_order_mark_counts_as_space() {
    assert!(is_form_space('\u{FEFF}'));
    assert!(!is_valid_email("a\u{FEFF}@b.c"));
    assert!(!is_valid_email("a@b\u{FEFF}.c"));
}

#[test]
fn next_line_is_not_space() {
    assert!(!is_form_space('\u{85}'));
    assert!(is_valid_email("a\u{85}@b.c"));
}

#[test]
fn common_spaces_break_the_address() {
    for space in [' ', '\t', '\n', '\u{A0}', '\u{2028}', '\u{3000}'] {
        assert!(is_form_space(space), "expected space: {space:?}");
        assert!(!is_valid_email(&format!("a{space}@b.c")), "expected invalid around {space:?}");
    }
}

// =============================================================
// validate_login
// =============================================================

#[test]
fn login_empty_fields_are_required() {
    let errors = validate_login(&login_form("", ""));
    assert_eq!(error(&errors, fields::EMAIL), Some(EMAIL_REQUIRED));
    assert_eq!(error(&errors, fields::PASSWORD), Some(PASSWORD_REQUIRED));
}

#[test]
fn login_invalid_email() {
    let errors = validate_login(&login_form("not-an-email", "secret"));
    assert_eq!(error(&errors, fields::EMAIL), Some(EMAIL_INVALID));
    assert_eq!(errors.len(), 1);
}

#[test]
fn login_whitespace_email_is_invalid_not_missing() {
    let errors = validate_login(&login_form("   ", "secret"));
    assert_eq!(error(&errors, fields::EMAIL), Some(EMAIL_INVALID));
}

#[test]
fn login_short_password_is_fine() {
    assert!(validate_login(&login_form("a@b.co", "x")).is_empty());
}

// =============================================================
// validate_register
// =============================================================

#[test]
fn register_valid_form_has_no_errors() {
    let errors = validate_register(&register_form("Ada", "ada@clinic.org", "longenough", "longenough"));
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn register_requires_name() {
    let errors = validate_register(&register_form("", "ada@clinic.org", "longenough", "longenough"));
    assert_eq!(error(&errors, fields::NAME), Some(NAME_REQUIRED));
    assert_eq!(errors.len(), 1);
}

#[test]
fn register_short_password_rejected() {
    let errors = validate_register(&register_form("Ada", "ada@clinic.org", "short", "short"));
    assert_eq!(error(&errors, fields::PASSWORD), Some(PASSWORD_TOO_SHORT));
    assert_eq!(error(&errors, fields::CONFIRM_PASSWORD), None);
}

#[test]
fn register_exactly_min_length_accepted() {
    let errors = validate_register(&register_form("Ada", "ada@clinic.org", "12345678", "12345678"));
    assert!(errors.is_empty());
}

#[test]
fn register_mismatch_rejected_independently_of_length() {
    let long = validate_register(&register_form("Ada", "ada@clinic.org", "longenough", "longenougH"));
    assert_eq!(error(&long, fields::CONFIRM_PASSWORD), Some(PASSWORDS_DIFFER));
    assert_eq!(error(&long, fields::PASSWORD), None);

    let short = validate_register(&register_form("Ada", "ada@clinic.org", "short", "other"));
    assert_eq!(error(&short, fields::PASSWORD), Some(PASSWORD_TOO_SHORT));
    assert_eq!(error(&short, fields::CONFIRM_PASSWORD), Some(PASSWORDS_DIFFER));
}

#[test]
fn register_empty_form_reports_every_field() {
    let errors = validate_register(&register_form("", "", "", ""));
    assert_eq!(error(&errors, fields::NAME), Some(NAME_REQUIRED));
    assert_eq!(error(&errors, fields::EMAIL), Some(EMAIL_REQUIRED));
    assert_eq!(error(&errors, fields::PASSWORD), Some(PASSWORD_REQUIRED));
    assert_eq!(error(&errors, fields::CONFIRM_PASSWORD), None);
}

#[test]
fn password_length_counts_utf16_units_not_bytes() {
    assert_eq!(password_len("ééééééé"), 7);
    let errors = validate_register(&register_form("Ada", "ada@clinic.org", "ééééééé", "ééééééé"));
    assert_eq!(error(&errors, fields::PASSWORD), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn astral_characters_count_as_two_units() {
    assert_eq!(password_len("😀😀😀😀"), 8);
    let errors = validate_register(&register_form("Ada", "ada@clinic.org", "😀😀😀😀", "😀😀😀😀"));
    assert_eq!(error(&errors, fields::PASSWORD), None);
    assert!(errors.is_empty());

    let errors = validate_register(&register_form("Ada", "ada@clinic.org", "😀😀😀x", "😀😀😀x"));
    assert_eq!(error(&errors, fields::PASSWORD), Some(PASSWORD_TOO_SHORT));
}
