//! Gatehouse - auth-aware site header and themed sign-in page
//!
//! A small web application built with Leptos and WebAssembly: a header that
//! switches on the signed-in flag and a sign-in page styled from theme tokens.

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
