//! Login page: email + password against the authentication stub.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{finish_submission, start_submission};
use crate::components::auth_card::AuthCard;
use crate::components::button::Button;
use crate::components::input::{Input, field_error, field_setter, field_value};
use crate::routes;
use crate::state::form::FormState;
use crate::state::session::use_session;
use crate::util::lifetime::LifetimeToken;
use crate::util::validation::{fields, validate_login};

pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::default());
    let alive = LifetimeToken::for_current_owner();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = start_submission(form, validate_login) else {
            return;
        };
        let navigate = navigate.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            if let Some(next) = finish_submission(session, form, alive, credentials, LOGIN_FAILED_MESSAGE).await {
                navigate(next, NavigateOptions::default());
            }
        });
    };

    view! {
        <AuthCard title="Sign in to your account">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <Show when=move || form.with(|f| f.form_error().is_some())>
                    <div class="alert alert--error" role="alert">
                        {move || form.with(|f| f.form_error().unwrap_or_default().to_owned())}
                    </div>
                </Show>

                <Input
                    label="Email address"
                    name=fields::EMAIL
                    input_type="email"
                    autocomplete="email"
                    value=field_value(form, fields::EMAIL)
                    error=field_error(form, fields::EMAIL)
                    on_input=field_setter(form, fields::EMAIL)
                />

                <Input
                    label="Password"
                    name=fields::PASSWORD
                    input_type="password"
                    autocomplete="current-password"
                    value=field_value(form, fields::PASSWORD)
                    error=field_error(form, fields::PASSWORD)
                    on_input=field_setter(form, fields::PASSWORD)
                />

                <Button kind="submit" loading=Signal::derive(move || form.with(|f| f.loading))>
                    "Sign in"
                </Button>

                <p class="auth-form__switch">
                    <a href=routes::REGISTER>"Don't have an account? Sign up"</a>
                </p>
            </form>
        </AuthCard>
    }
}
