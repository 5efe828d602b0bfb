use super::*;

#[test]
fn protected_routes_require_login() {
    assert!(is_protected("/upload"));
    assert!(is_protected("/dashboard"));
    assert!(is_protected("/profile"));
    assert!(is_protected("/results"));
}

#[test]
fn public_routes_are_not_protected() {
    assert!(!is_protected("/"));
    assert!(!is_protected("/login"));
    assert!(!is_protected("/register"));
}

#[test]
fn trailing_slash_is_ignored() {
    assert!(is_protected("/upload/"));
    assert!(!is_protected("/login/"));
}

#[test]
fn prefix_match_is_not_enough() {
    assert!(!is_protected("/uploads"));
    assert!(!is_protected("/upload/extra"));
}
