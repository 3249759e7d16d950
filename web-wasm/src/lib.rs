//! Archive Nexus Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod pages;
mod session;
mod toast;

pub mod clock;
pub mod logging;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    tracing::info!("archive nexus web starting");
    leptos::mount::mount_to_body(app::App);
}
