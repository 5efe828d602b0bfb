//! Member pages reached from the navigation bar.
//!
//! These screens have no content of their own yet. Each one sends a
//! visitor without a session back to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
fn MemberOnly(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, path, use_navigate());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <p class="page-status">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let greeting = move || session.user().map(|u| format!("Welcome back, {}", u.name)).unwrap_or_default();

    view! {
        <MemberOnly path=routes::DASHBOARD>
            <section class="placeholder-page">
                <h1 class="placeholder-page__title">"Dashboard"</h1>
                <p class="placeholder-page__lead">{greeting}</p>
                <p>"Your scan history will appear here."</p>
                <a class="btn btn--primary" href=routes::UPLOAD>
                    "Upload an image"
                </a>
            </section>
        </MemberOnly>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let name = move || session.user().map(|u| u.name).unwrap_or_default();
    let email = move || session.user().map(|u| u.email).unwrap_or_default();
    let role = move || session.user().map(|u| u.role.label()).unwrap_or_default();

    view! {
        <MemberOnly path=routes::PROFILE>
            <section class="placeholder-page">
                <h1 class="placeholder-page__title">"Profile"</h1>
                <dl class="profile-list">
                    <dt>"Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Role"</dt>
                    <dd>{role}</dd>
                </dl>
            </section>
        </MemberOnly>
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    view! {
        <MemberOnly path=routes::RESULTS>
            <section class="placeholder-page">
                <h1 class="placeholder-page__title">"Analysis Results"</h1>
                <p>"Your image was submitted. Detailed results are not available yet."</p>
                <a class="btn btn--secondary" href=routes::UPLOAD>
                    "Analyze another image"
                </a>
            </section>
        </MemberOnly>
    }
}
