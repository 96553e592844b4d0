//! DMCP Console - Administrative console for a DMCP backend
//!
//! A web application for managing data sources, tools and API tokens,
//! built with Leptos and WebAssembly. The backend REST API is an external
//! service; this crate owns the client-side session lifecycle, routing
//! and console pages.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
