use leptos::prelude::*;
use leptos::task::spawn_local;
use stylance::import_crate_style;

use super::toast::{use_toaster, ToastKind};
use crate::app::model::{draft_is_valid, ReloadTick};
use crate::app::services::quote_api;

import_crate_style!(style, "./styles/quote-form.css");

/// Controlled submission form. On success the draft is cleared and the list
/// is asked to reload; on failure the draft stays put so nothing typed is
/// lost.
#[component]
pub fn QuoteForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let toaster = use_toaster();
    let set_reload = use_context::<WriteSignal<ReloadTick>>().expect("Reload setter context");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let submitted_name = name.get_untracked();
        let submitted_message = message.get_untracked();
        if !draft_is_valid(&submitted_name, &submitted_message) {
            // The `required` attributes normally catch this first.
            log::warn!("Ignoring submit with an empty field");
            return;
        }

        spawn_local(async move {
            match quote_api::submit_quote(&submitted_name, &submitted_message).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_message.set(String::new());
                    set_reload.update(|tick| *tick = tick.bump());
                    toaster.push(
                        ToastKind::Success,
                        "Submitted Quote",
                        format!("{} by {}", submitted_message, submitted_name),
                    );
                }
                Err(err) => {
                    log::error!("Error submitting quote: {}", err);
                    toaster.push(
                        ToastKind::Error,
                        "Failed to Submit Quote",
                        "There was an error submitting your quote.",
                    );
                }
            }
        });
    };

    view! {
        <section class=style::form_panel>
            <div class=style::form_inner>
                <h2 class=style::form_title>"Submit a quote"</h2>
                <form class=style::form on:submit=on_submit>
                    <div class=style::field>
                        <label class=style::field_label for="input-name">
                            "Name"
                        </label>
                        <input
                            type="text"
                            name="name"
                            id="input-name"
                            class=style::field_input
                            placeholder="peter the anteater"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class=style::field>
                        <label class=style::field_label for="input-message">
                            "Quote"
                        </label>
                        <textarea
                            name="message"
                            id="input-message"
                            class=style::field_textarea
                            placeholder="zot! zot! zot!"
                            required
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class=style::submit_button>
                        "Submit"
                    </button>
                </form>
            </div>
        </section>
    }
}
