//! Centered card framing the login and registration forms.

use leptos::prelude::*;

use crate::consts::APP_NAME;

#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <p class="auth-card__brand">{APP_NAME}</p>
                <h2 class="auth-card__title">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
