//! Drag-and-drop target that doubles as a file-picker button.

#[cfg(test)]
#[path = "dropzone_test.rs"]
mod dropzone_test;

use leptos::prelude::*;

use crate::consts::FILE_INPUT_ACCEPT;
use crate::util::file_read::PickedFile;

/// Keys that activate the drop zone like a button.
pub(crate) fn opens_picker(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Hands every drop or picker selection to `on_files`, unfiltered.
#[component]
pub fn Dropzone(
    on_files: Callback<Vec<PickedFile>>,
    #[prop(into, default = Signal::stored(false))] reading: Signal<bool>,
) -> impl IntoView {
    let drag_active = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(not(feature = "hydrate"))]
    let _ = on_files;

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };
    let on_drag_leave = move |_ev: leptos::ev::DragEvent| drag_active.set(false);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            let files = crate::util::file_read::from_file_list(ev.data_transfer().and_then(|dt| dt.files()));
            on_files.run(files);
        }
    };
    let on_open_picker = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };
    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if !opens_picker(&ev.key()) {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };
    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                let files = crate::util::file_read::from_file_list(input.files());
                // Reset so picking the same file again still fires `change`.
                input.set_value("");
                on_files.run(files);
            }
        }
    };

    view! {
        <div
            class="dropzone"
            class:dropzone--active=move || drag_active.get()
            role="button"
            tabindex="0"
            on:click=on_open_picker
            on:keydown=on_key_down
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                class="dropzone__input"
                type="file"
                accept=FILE_INPUT_ACCEPT
                on:change=on_change
                on:click=move |ev| ev.stop_propagation()
            />
            <span class="dropzone__icon" aria-hidden="true">"⇪"</span>
            <p class="dropzone__prompt">
                {move || {
                    if reading.get() {
                        "Reading file…"
                    } else if drag_active.get() {
                        "Drop the image here"
                    } else {
                        "Drag and drop your image here, or click to select a file"
                    }
                }}
            </p>
            <p class="dropzone__hint">"Supported formats: JPEG, PNG"</p>
        </div>
    }
}
