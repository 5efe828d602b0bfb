//! Primary/secondary action button with a loading spinner.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

pub(crate) fn button_class(variant: ButtonVariant, loading: bool) -> String {
    let mut class = String::from("btn");
    class.push_str(match variant {
        ButtonVariant::Primary => " btn--primary",
        ButtonVariant::Secondary => " btn--secondary",
    });
    if loading {
        class.push_str(" btn--loading");
    }
    class
}

/// Button that disables itself and shows a spinner in place of its label
/// while `loading` is true.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "button")] kind: &'static str,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=move || button_class(variant, loading.get())
            disabled=move || loading.get() || disabled.get()
            aria-busy=move || if loading.get() { "true" } else { "false" }
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            <span class="btn__label" class:btn__label--hidden=move || loading.get()>
                {children()}
            </span>
        </button>
    }
}
