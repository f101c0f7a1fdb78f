use leptos::prelude::*;
use stylance::import_crate_style;

import_crate_style!(style, "./styles/header.css");

/// Static branding bar. No state.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=style::header>
            <span class=style::logo_mark>"\u{201C}"</span>
            <h1 class=style::title>"quote book"</h1>
        </header>
    }
}
