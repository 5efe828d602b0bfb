//! Top navigation bar with a collapsible mobile menu.
//!
//! DESIGN
//! ======
//! The link set is a pure function of whether a user is signed in, so the
//! desktop row and the mobile drawer always agree.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::consts::APP_NAME;
use crate::routes;
use crate::state::session::use_session;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const MEMBER_LINKS: &[NavLink] = &[
    NavLink { href: routes::UPLOAD, label: "Upload" },
    NavLink { href: routes::DASHBOARD, label: "Dashboard" },
    NavLink { href: routes::PROFILE, label: "Profile" },
];

const GUEST_LINKS: &[NavLink] = &[
    NavLink { href: routes::LOGIN, label: "Login" },
    NavLink { href: routes::REGISTER, label: "Register" },
];

/// Links to render for a signed-in (`true`) or anonymous visitor.
pub fn nav_links(authenticated: bool) -> &'static [NavLink] {
    if authenticated { MEMBER_LINKS } else { GUEST_LINKS }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();

    let close_menu = move || ui.update(UiState::close_mobile_menu);
    let on_logout = move |_| {
        session.logout();
        close_menu();
    };

    let render_links = move |item_class: &'static str| {
        nav_links(session.is_authenticated())
            .iter()
            .map(|link| {
                let highlight = link.href == routes::REGISTER;
                view! {
                    <a
                        href=link.href
                        class=item_class
                        class:navbar__link--cta=highlight
                        on:click=move |_| close_menu()
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a href=routes::HOME class="navbar__brand" on:click=move |_| close_menu()>
                    {APP_NAME}
                </a>

                <div class="navbar__links">
                    {move || render_links("navbar__link")}
                    <Show when=move || session.is_authenticated()>
                        <button class="navbar__link navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if ui.get().mobile_menu_open { "true" } else { "false" }
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <div class="navbar__drawer">
                    {move || render_links("navbar__drawer-link")}
                    <Show when=move || session.is_authenticated()>
                        <button class="navbar__drawer-link navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
