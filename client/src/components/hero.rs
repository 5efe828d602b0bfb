//! Landing page hero with a session-aware call to action.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::routes;
use crate::state::session::use_session;

/// Target and label of the primary call to action.
pub(crate) fn hero_cta(authenticated: bool) -> (&'static str, &'static str) {
    if authenticated { (routes::UPLOAD, "Upload an image") } else { (routes::REGISTER, "Get started") }
}

#[component]
pub fn Hero() -> impl IntoView {
    let session = use_session();
    let cta = move || hero_cta(session.is_authenticated());

    view! {
        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">
                    "Early melanoma detection, "
                    <span class="hero__title-accent">"powered by AI"</span>
                </h1>
                <p class="hero__lead">
                    "Upload a dermoscopic image and get a fast, consistent second opinion to support your clinical assessment."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary hero__cta" href=move || cta().0>
                        {move || cta().1}
                    </a>
                    <a class="btn btn--secondary hero__secondary" href="#features">
                        "Learn more"
                    </a>
                </div>
            </div>
        </section>
    }
}
