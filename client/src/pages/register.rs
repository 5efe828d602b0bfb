//! Registration page.
//!
//! There is no account backend: a valid registration signs the user in
//! through the same authentication stub as the login page. The chosen name
//! and role are validated but not sent anywhere.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{finish_submission, start_submission};
use crate::components::auth_card::AuthCard;
use crate::components::button::Button;
use crate::components::input::{Input, field_error, field_setter, field_value};
use crate::net::types::Role;
use crate::routes;
use crate::state::form::FormState;
use crate::state::session::use_session;
use crate::util::lifetime::LifetimeToken;
use crate::util::validation::{fields, validate_register};

pub(crate) const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::with_values(&[(fields::ROLE, Role::default().as_str())]));
    let alive = LifetimeToken::for_current_owner();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = start_submission(form, validate_register) else {
            return;
        };
        let navigate = navigate.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            if let Some(next) = finish_submission(session, form, alive, credentials, REGISTER_FAILED_MESSAGE).await {
                navigate(next, NavigateOptions::default());
            }
        });
    };

    let on_role_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if let Some(role) = Role::parse(&raw) {
            form.update(|f| f.set_value(fields::ROLE, role.as_str()));
        }
    };

    view! {
        <AuthCard title="Create your account">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <Show when=move || form.with(|f| f.form_error().is_some())>
                    <div class="alert alert--error" role="alert">
                        {move || form.with(|f| f.form_error().unwrap_or_default().to_owned())}
                    </div>
                </Show>

                <Input
                    label="Full name"
                    name=fields::NAME
                    autocomplete="name"
                    value=field_value(form, fields::NAME)
                    error=field_error(form, fields::NAME)
                    on_input=field_setter(form, fields::NAME)
                />

                <Input
                    label="Email address"
                    name=fields::EMAIL
                    input_type="email"
                    autocomplete="email"
                    value=field_value(form, fields::EMAIL)
                    error=field_error(form, fields::EMAIL)
                    on_input=field_setter(form, fields::EMAIL)
                />

                <div class="field">
                    <label class="field__label" for="field-role">
                        "Role"
                    </label>
                    <select
                        id="field-role"
                        class="field__input"
                        name=fields::ROLE
                        prop:value=move || form.with(|f| f.value(fields::ROLE).to_owned())
                        on:change=on_role_change
                    >
                        {Role::SELECTABLE
                            .iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <Input
                    label="Password"
                    name=fields::PASSWORD
                    input_type="password"
                    autocomplete="new-password"
                    value=field_value(form, fields::PASSWORD)
                    error=field_error(form, fields::PASSWORD)
                    on_input=field_setter(form, fields::PASSWORD)
                />

                <Input
                    label="Confirm password"
                    name=fields::CONFIRM_PASSWORD
                    input_type="password"
                    autocomplete="new-password"
                    value=field_value(form, fields::CONFIRM_PASSWORD)
                    error=field_error(form, fields::CONFIRM_PASSWORD)
                    on_input=field_setter(form, fields::CONFIRM_PASSWORD)
                />

                <Button kind="submit" loading=Signal::derive(move || form.with(|f| f.loading))>
                    "Create account"
                </Button>

                <p class="auth-form__switch">
                    <a href=routes::LOGIN>"Already have an account? Sign in"</a>
                </p>
            </form>
        </AuthCard>
    }
}
