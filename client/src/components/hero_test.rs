use super::*;

#[test]
fn anonymous_cta_points_to_register() {
    assert_eq!(hero_cta(false).0, "/register");
}

#[test]
fn signed_in_cta_points_to_upload() {
    assert_eq!(hero_cta(true), ("/upload", "Upload an image"));
}
