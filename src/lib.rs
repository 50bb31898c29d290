//! # sellcar-client
//!
//! Leptos + WASM frontend for the used-car quick-sale lead form.
//! A single page collects plate number, phone, region, and mileage and
//! posts them to the lead-intake endpoint.
//!
//! This crate contains the page, application state, the intake API
//! client, and pure input helpers. Validation and submission-phase
//! logic are kept in plain testable modules; the Leptos component only
//! wires signals to them.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
