use super::*;

fn hrefs(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.href).collect()
}

#[test]
fn anonymous_visitor_sees_login_and_register() {
    assert_eq!(hrefs(nav_links(false)), vec!["/login", "/register"]);
}

#[test]
fn signed_in_user_sees_member_links() {
    assert_eq!(hrefs(nav_links(true)), vec!["/upload", "/dashboard", "/profile"]);
}

#[test]
fn link_sets_do_not_overlap() {
    for link in nav_links(true) {
        assert!(!nav_links(false).contains(link));
    }
}

#[test]
fn member_links_are_all_protected() {
    assert!(nav_links(true).iter().all(|l| routes::is_protected(l.href)));
    assert!(nav_links(false).iter().all(|l| !routes::is_protected(l.href)));
}
