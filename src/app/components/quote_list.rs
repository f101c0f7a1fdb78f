use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, ARROW_DOWN, ARROW_UP};
use stylance::import_crate_style;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::quote_card::QuoteCard;
use crate::app::model::{
    is_at_bottom, sorted_by_time_desc, LayoutMode, Quote, ReloadTick, RequestSequence, TimeWindow,
    SKELETON_COUNT,
};
use crate::app::services::quote_api;

import_crate_style!(style, "./styles/quote-list.css");

/// The time-windowed quote feed: window tabs, the scrollable list itself,
/// the enlarged-quote overlay, and the scroll shortcut.
///
/// Owns the fetch-sort-render cycle. A fetch is issued on mount and on every
/// change to the selected window or the reload tick; responses belonging to
/// a superseded request are discarded so an older window's data can never
/// overwrite a newer one's, however the responses are ordered.
#[component]
pub fn QuoteList() -> impl IntoView {
    let window = use_context::<ReadSignal<TimeWindow>>().expect("Window context");
    let set_window = use_context::<WriteSignal<TimeWindow>>().expect("Window setter context");
    let layout = use_context::<ReadSignal<LayoutMode>>().expect("Layout context");
    let reload = use_context::<ReadSignal<ReloadTick>>().expect("Reload context");

    let (quotes, set_quotes) = signal(Vec::<Quote>::new());
    let (loading, set_loading) = signal(false);
    let (expanded, set_expanded) = signal(None::<usize>);
    let (at_bottom, set_at_bottom) = signal(false);

    // Most recent first; stable, so equal timestamps keep server order.
    let sorted = Memo::new(move |_| sorted_by_time_desc(&quotes.get()));

    let list_ref = NodeRef::<leptos::html::Div>::new();
    let generation = StoredValue::new(RequestSequence::default());

    let load = move |window: TimeWindow| {
        let mut token = 0;
        generation.update_value(|sequence| token = sequence.begin());

        set_loading.set(true);
        log::info!("Loading quotes for window {}", window);

        spawn_local(async move {
            let result = quote_api::fetch_quotes(window).await;

            let current = generation.with_value(|sequence| sequence.is_current(token));
            if !current {
                // A newer request owns the loading flag and the data now.
                log::debug!("Discarding stale response for window {}", window);
                return;
            }

            match result {
                Ok(batch) => set_quotes.set(batch),
                // Keep whatever loaded last; the failure is log-only here.
                Err(err) => log::error!("Error fetching quotes: {}", err),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let _ = reload.get();
        load(window.get());
    });

    let on_scroll = move |_| {
        if let Some(element) = list_ref.get_untracked() {
            set_at_bottom.set(is_at_bottom(
                element.scroll_top() as f64,
                element.client_height() as f64,
                element.scroll_height() as f64,
            ));
        }
    };

    let scroll_list = move |to_top: bool| {
        if let Some(element) = list_ref.get_untracked() {
            let options = ScrollToOptions::new();
            options.set_top(if to_top {
                0.0
            } else {
                element.scroll_height() as f64
            });
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <section class=style::quote_list>
            <nav class=style::tab_bar>
                {TimeWindow::ALL
                    .into_iter()
                    .map(|tab| {
                        view! { <WindowTab window=tab selected=window set_selected=set_window /> }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div
                node_ref=list_ref
                on:scroll=on_scroll
                class=move || {
                    let layout_class = match layout.get() {
                        LayoutMode::List => style::layout_list,
                        LayoutMode::Grid => style::layout_grid,
                    };
                    format!("{} {}", style::quotes_scroll, layout_class)
                }
            >
                {move || {
                    if loading.get() {
                        (0..SKELETON_COUNT)
                            .map(|_| view! { <div class=style::skeleton></div> })
                            .collect::<Vec<_>>()
                            .into_any()
                    } else {
                        sorted
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, quote)| {
                                let slot_class = if index == 0 {
                                    format!("{} {}", style::card_slot, style::card_slot_first)
                                } else {
                                    style::card_slot.to_string()
                                };
                                view! {
                                    <div
                                        class=slot_class
                                        on:click=move |_| set_expanded.set(Some(index))
                                    >
                                        <QuoteCard quote=quote />
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>

            {move || {
                expanded
                    .get()
                    .and_then(|index| sorted.get().get(index).cloned())
                    .map(|quote| {
                        view! {
                            <div
                                class=style::overlay_backdrop
                                on:click=move |_| set_expanded.set(None)
                            >
                                <div
                                    class=style::overlay_quote
                                    on:click=move |ev| ev.stop_propagation()
                                >
                                    <QuoteCard quote=quote />
                                </div>
                            </div>
                        }
                    })
            }}

            <div class=style::scroll_shortcuts>
                {move || {
                    if at_bottom.get() {
                        view! {
                            <button
                                class=style::scroll_button
                                on:click=move |_| scroll_list(true)
                            >
                                <Icon icon=ARROW_UP size="25px" />
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class=style::scroll_button
                                on:click=move |_| scroll_list(false)
                            >
                                <Icon icon=ARROW_DOWN size="25px" />
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// Time-window tab button; the active window is highlighted.
#[component]
fn WindowTab(
    window: TimeWindow,
    selected: ReadSignal<TimeWindow>,
    set_selected: WriteSignal<TimeWindow>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if selected.get() == window {
                    format!("{} {}", style::tab, style::tab_active)
                } else {
                    style::tab.to_string()
                }
            }
            on:click=move |_| {
                log::info!("Switching quote window to {}", window);
                set_selected.set(window);
            }
        >
            {window.to_string()}
        </button>
    }
}
