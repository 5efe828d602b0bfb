//! Landing page.

use leptos::prelude::*;

use crate::components::features::Features;
use crate::components::hero::Hero;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero/>
            <Features/>
        </div>
    }
}
