use leptos::prelude::*;
use stylance::import_crate_style;

use crate::app::model::{format_time, Quote};

import_crate_style!(style, "./styles/quote-card.css");

/// One rendered quote: attribution and timestamp on top, message below.
/// Shared between the feed and the enlarged overlay view.
#[component]
pub fn QuoteCard(quote: Quote) -> impl IntoView {
    view! {
        <article class=style::card>
            <div class=style::card_meta>
                <h3 class=style::card_name>{quote.name}</h3>
                <span class=style::card_divider>"|"</span>
                <h4 class=style::card_time>{format_time(&quote.time)}</h4>
            </div>
            <h2 class=style::card_message>{quote.message}</h2>
        </article>
    }
}
