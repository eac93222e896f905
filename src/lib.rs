//! BuddyBots.ai - AI automation agency website
//!
//! A server-rendered, hydrated landing site built with Leptos. The `core`
//! module holds the browser-independent logic (ROI estimate, lead forms,
//! navigation, analytics events, booking widget configuration); `ui` renders
//! it.

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
