use leptos::prelude::*;
use stylance::import_crate_style;

mod components;
mod model;
mod services;

use components::{Header, QuoteForm, QuoteList, ToastShelf, Toaster};
use model::{LayoutMode, ReloadTick, TimeWindow};

// Import CSS modules with Stylance
import_crate_style!(style, "./styles/app.css");

/// Main application component. Owns the shared UI state (selected time
/// window, layout mode, reload tick) and provides it via context; nothing
/// here survives a page reload.
#[component]
pub fn App() -> impl IntoView {
    log::info!("Rendering App component");

    let (window, set_window) = signal(TimeWindow::default());
    let (layout, set_layout) = signal(LayoutMode::default());
    let (reload, set_reload) = signal(ReloadTick::default());
    let toaster = Toaster::new();

    // Provide global state context
    provide_context(window);
    provide_context(set_window);
    provide_context(layout);
    provide_context(set_layout);
    provide_context(reload);
    provide_context(set_reload);
    provide_context(toaster);

    view! {
        <div class=style::app_container>
            <Header />
            <main class=style::main_content>
                <QuoteForm />
                <QuoteList />
            </main>
            <LayoutSwitcher />
            <ToastShelf />
        </div>
    }
}

/// Layout switcher pill, fixed to the bottom-left corner. Purely cosmetic;
/// switching never touches the loaded data.
#[component]
fn LayoutSwitcher() -> impl IntoView {
    let layout = use_context::<ReadSignal<LayoutMode>>().expect("Layout context");
    let set_layout = use_context::<WriteSignal<LayoutMode>>().expect("Layout setter context");

    view! {
        <div class=style::layout_dock>
            <nav class=style::layout_switcher>
                {LayoutMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! { <LayoutButton mode=mode layout=layout set_layout=set_layout /> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}

#[component]
fn LayoutButton(
    mode: LayoutMode,
    layout: ReadSignal<LayoutMode>,
    set_layout: WriteSignal<LayoutMode>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if layout.get() == mode {
                    format!("{} {}", style::layout_button, style::layout_button_active)
                } else {
                    style::layout_button.to_string()
                }
            }
            on:click=move |_| {
                log::info!("Switching to {} layout", mode);
                set_layout.set(mode);
            }
        >
            {mode.to_string()}
        </button>
    }
}
