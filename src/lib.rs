/// Tab Grouper - Chrome Extension that sorts tabs and groups them by domain
/// Built with Rust + WASM + Yew

mod chrome;
pub mod error;
pub mod grouping;
pub mod host;
pub mod listing;
pub mod sorting;
pub mod tab_data;
pub mod workflow;
pub mod ui;

use wasm_bindgen::prelude::*;

const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
}

// Re-export label derivation for JavaScript access
#[wasm_bindgen]
pub fn hostname_to_label(hostname: &str) -> String {
    grouping::hostname_to_label(hostname)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
