use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;

pub use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Quote book console initializing...");

    // Mount the Leptos app
    mount_to_body(App);

    log::info!("Quote book console mounted successfully");
}
