//! Labelled text input bound to a [`FormState`] field.

use leptos::prelude::*;

use crate::state::form::FormState;

/// Labelled input with an inline error line.
#[component]
pub fn Input(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = format!("field-{name}");
    let has_error = move || error.with(Option::is_some);

    view! {
        <div class="field">
            <label class="field__label" for=id.clone()>
                {label}
            </label>
            <input
                id=id
                class="field__input"
                class:field__input--invalid=has_error
                type=input_type
                name=name
                autocomplete=autocomplete
                aria-invalid=move || if has_error() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=has_error>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Reactive value of `field`.
pub fn field_value(form: RwSignal<FormState>, field: &'static str) -> Signal<String> {
    Signal::derive(move || form.with(|f| f.value(field).to_owned()))
}

/// Reactive inline error of `field`.
pub fn field_error(form: RwSignal<FormState>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || form.with(|f| f.error(field).map(str::to_owned)))
}

/// Callback writing into `field`, clearing its error.
pub fn field_setter(form: RwSignal<FormState>, field: &'static str) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| f.set_value(field, value)))
}
