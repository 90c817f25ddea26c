#![allow(non_snake_case)]

pub mod components;
pub mod logging;
pub mod services;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);

    log::info!(
        "Starting {} frontend v{}",
        must_admissions::NAME,
        must_admissions::VERSION
    );

    // Remove loading spinner
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
