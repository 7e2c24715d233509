//! Reelsmith UI entry point for WASM.

#![no_main]

use leptos::prelude::*;
use reelsmith_ui::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point for the WASM application.
/// This function is called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();

    // Remove the boot splash rendered by index.html
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(splash) = document.get_element_by_id("boot-splash")
    {
        splash.remove();
    }

    mount_to_body(App);
}
