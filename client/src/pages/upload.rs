//! Upload page: pick one image, preview it, submit it for analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! Without a signed-in user only a login prompt renders, so no file
//! handling is reachable. The workflow itself lives in a child component
//! whose reactive owner (and liveness token) is dropped on logout or
//! navigation, discarding any read or analysis still in flight.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant};
use crate::components::dropzone::Dropzone;
use crate::net::api;
use crate::routes;
use crate::state::session::use_session;
use crate::state::upload::{AnalysisStep, Preview, Ticket, UploadState};
use crate::util::file_read::{self, PickedFile};
use crate::util::lifetime::LifetimeToken;

const GUIDELINES: &[&str] = &[
    "Ensure the image is clear and well-lit",
    "Center the suspicious area in the frame",
    "Include some surrounding healthy skin for comparison",
    "Avoid using filters or editing the image",
];

/// Human-readable file size (`812 B`, `10.0 KB`, `2.4 MB`).
#[allow(clippy::cast_precision_loss)]
pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b < KB => format!("{b} B"),
        b if b < MB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{:.1} MB", b as f64 / MB as f64),
    }
}

/// Offer a selection to the state machine and start reading the accepted file.
fn accept_files(upload: RwSignal<UploadState>, alive: &LifetimeToken, files: Vec<PickedFile>) {
    let metas = file_read::metas(&files);
    let Some(ticket) = upload.try_update(|u| u.select_files(&metas)).flatten() else {
        #[cfg(feature = "hydrate")]
        if let Some(first) = metas.first() {
            log::info!("file not accepted: {} ({:?})", first.name, first.mime);
        }
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = file_read::read_data_url(&file).await;
            if !alive.is_alive() {
                return;
            }
            upload.update(|u| match outcome {
                Ok(data_url) => {
                    if !u.complete_read(ticket, data_url) {
                        log::debug!("discarded stale read of {}", file.meta.name);
                    }
                }
                Err(err) => {
                    log::warn!("{err}");
                    u.fail_read(ticket);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (ticket, alive);
}

/// Run the analysis collaborator and apply its outcome.
///
/// Returns the route to navigate to, if any.
pub(crate) async fn complete_analysis(
    upload: RwSignal<UploadState>,
    alive: LifetimeToken,
    ticket: Ticket,
    preview: Preview,
) -> Option<&'static str> {
    let outcome = api::analyze_image(&preview).await;
    if !alive.is_alive() {
        return None;
    }
    #[cfg(feature = "hydrate")]
    if let Err(err) = &outcome {
        log::warn!("analysis of {} failed: {err}", preview.file.name);
    }
    match upload.try_update(|u| u.finish_analysis(ticket, outcome))? {
        AnalysisStep::Navigate(next) => Some(next),
        AnalysisStep::Failed | AnalysisStep::Stale => None,
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.is_authenticated() fallback=LoginPrompt>
            <UploadWorkflow/>
        </Show>
    }
}

#[component]
fn LoginPrompt() -> impl IntoView {
    view! {
        <div class="upload-page upload-page--guest">
            <div class="upload-guest">
                <h2 class="upload-guest__title">"Please log in to upload images"</h2>
                <a class="btn btn--primary" href=routes::LOGIN>
                    "Go to Login"
                </a>
            </div>
        </div>
    }
}

#[component]
fn UploadWorkflow() -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());
    let destination = RwSignal::new(None::<&'static str>);
    let alive = LifetimeToken::for_current_owner();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(next) = destination.get() {
            navigate(next, NavigateOptions::default());
        }
    });

    let on_files = Callback::new({
        let alive = alive.clone();
        move |files: Vec<PickedFile>| accept_files(upload, &alive, files)
    });
    let on_clear = Callback::new(move |()| {
        upload.update(|u| {
            u.clear();
        });
    });
    let on_analyze = Callback::new(move |()| {
        let Some((ticket, preview)) = upload.try_update(UploadState::begin_analysis).flatten() else {
            return;
        };
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            if let Some(next) = complete_analysis(upload, alive, ticket, preview).await {
                destination.set(Some(next));
            }
        });
    });

    let analyzing = Signal::derive(move || upload.with(UploadState::is_analyzing));
    let reading = Signal::derive(move || upload.with(UploadState::is_reading));
    let preview_src = move || upload.with(|u| u.preview.as_ref().map(|p| p.data_url.clone()).unwrap_or_default());
    let preview_caption = move || {
        upload.with(|u| {
            u.preview
                .as_ref()
                .map(|p| format!("{} · {}", p.file.name, format_size(p.file.size)))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="upload-page">
            <div class="upload-card">
                <h1 class="upload-card__title">"Upload Image for Analysis"</h1>

                <Show when=move || upload.with(|u| u.error.is_some())>
                    <div class="alert alert--error" role="alert">
                        {move || upload.with(|u| u.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <Show
                    when=move || upload.with(|u| u.preview.is_some())
                    fallback=move || view! { <Dropzone on_files=on_files reading=reading/> }
                >
                    <div class="upload-preview">
                        <div class="upload-preview__frame">
                            <img class="upload-preview__image" alt="Preview" src=preview_src/>
                            <button
                                class="upload-preview__dismiss"
                                aria-label="Clear"
                                disabled=move || analyzing.get()
                                on:click=move |_| on_clear.run(())
                            >
                                "✕"
                            </button>
                        </div>
                        <p class="upload-preview__caption">{preview_caption}</p>
                        <div class="upload-preview__actions">
                            <Button variant=ButtonVariant::Secondary disabled=analyzing on_click=on_clear>
                                "Clear"
                            </Button>
                            <Button loading=analyzing on_click=on_analyze>
                                "Analyze Image"
                            </Button>
                        </div>
                    </div>
                </Show>

                <div class="upload-guidelines">
                    <h2 class="upload-guidelines__title">"Guidelines"</h2>
                    <ul class="upload-guidelines__list">
                        {GUIDELINES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
