//! # client
//!
//! Leptos + WASM frontend for MelanomaScan: landing page, login and
//! registration forms, and the image upload workflow.
//!
//! This crate contains pages, components, application state, and the
//! collaborator stubs standing in for the authentication and analysis
//! services. The same code renders on the server (`ssr`) and hydrates in
//! the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
