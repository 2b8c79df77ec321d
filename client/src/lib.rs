//! # client
//!
//! Leptos + WASM frontend for the FiloSharp artisanal knife storefront:
//! product browsing and filtering, a localStorage-persisted cart, the
//! six-step knife customizer with its live canvas preview, mocked
//! authentication, and the admin product CRUD over a hosted JSON bin.
//!
//! This crate contains pages, components, application state, network types,
//! and persistence helpers. It integrates with the `preview` crate for
//! imperative canvas rendering via the `PreviewHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) is harmless.
    drop(console_log::init_with_level(log::Level::Info));
    leptos::mount::hydrate_body(app::App);
}
