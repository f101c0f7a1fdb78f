//! Browser smoke test: mount the app and check the static chrome renders.
//! Runs under `wasm-pack test --headless` only; empty on native targets.

#![cfg(target_arch = "wasm32")]

use quotebook_console::App;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_the_quote_board() {
    leptos::mount::mount_to_body(App);

    let document = web_sys::window().unwrap().document().unwrap();
    let body_html = document.body().unwrap().inner_html();

    assert!(body_html.contains("Submit a quote"));
    assert!(body_html.contains("quote book"));
    // All four window tabs are present.
    for tab in ["all", "week", "month", "year"] {
        assert!(body_html.contains(tab), "missing window tab: {}", tab);
    }
}
