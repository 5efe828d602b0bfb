//! Client-side form validation rules.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::consts::MIN_PASSWORD_LEN;
use crate::state::form::{FieldErrors, FormState};

/// Form field names shared by the pages and the validators.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const ROLE: &str = "role";
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Whitespace as browsers define it for form patterns: Unicode `White_Space`
/// minus U+0085 (NEXT LINE), plus U+FEFF (BYTE ORDER MARK).
pub(crate) fn is_form_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Password length in UTF-16 code units, the unit browsers report.
pub(crate) fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Whether `input` contains `<non-space>+@<non-space>+.<non-space>+`.
///
/// The match is unanchored: surrounding text is allowed as long as one
/// such run appears somewhere.
pub fn is_valid_email(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.iter().enumerate().any(|(at, c)| {
        if *c != '@' || at == 0 || is_form_space(chars[at - 1]) {
            return false;
        }
        // Scan the whitespace-free run after '@' for a dot with text on both sides.
        let run = chars[at + 1..].iter().take_while(|c| !is_form_space(**c)).count();
        (1..run).any(|offset| {
            let dot = at + 1 + offset;
            chars[dot] == '.' && offset + 1 < run
        })
    })
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert(fields::EMAIL.to_owned(), EMAIL_REQUIRED.to_owned());
    } else if !is_valid_email(email) {
        errors.insert(fields::EMAIL.to_owned(), EMAIL_INVALID.to_owned());
    }
}

/// Email must be present and well-formed; password must be present.
pub fn validate_login(form: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(form.value(fields::EMAIL), &mut errors);
    if form.value(fields::PASSWORD).is_empty() {
        errors.insert(fields::PASSWORD.to_owned(), PASSWORD_REQUIRED.to_owned());
    }
    errors
}

/// Login rules plus a name, a minimum password length and a matching
/// confirmation. The confirmation check runs regardless of length.
pub fn validate_register(form: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.value(fields::NAME).is_empty() {
        errors.insert(fields::NAME.to_owned(), NAME_REQUIRED.to_owned());
    }
    check_email(form.value(fields::EMAIL), &mut errors);

    let password = form.value(fields::PASSWORD);
    if password.is_empty() {
        errors.insert(fields::PASSWORD.to_owned(), PASSWORD_REQUIRED.to_owned());
    } else if password_len(password) < MIN_PASSWORD_LEN {
        errors.insert(fields::PASSWORD.to_owned(), PASSWORD_TOO_SHORT.to_owned());
    }
    if password != form.value(fields::CONFIRM_PASSWORD) {
        errors.insert(fields::CONFIRM_PASSWORD.to_owned(), PASSWORDS_DIFFER.to_owned());
    }
    errors
}
