use super::*;

#[test]
fn default_variant_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn class_reflects_variant() {
    assert_eq!(button_class(ButtonVariant::Primary, false), "btn btn--primary");
    assert_eq!(button_class(ButtonVariant::Secondary, false), "btn btn--secondary");
}

#[test]
fn class_marks_loading() {
    assert_eq!(button_class(ButtonVariant::Primary, true), "btn btn--primary btn--loading");
}
