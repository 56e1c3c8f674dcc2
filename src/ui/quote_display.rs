//! Quote display - the randomly picked quote or a placeholder

use crate::app::AppState;
use crate::quotes::QuoteView;
use dioxus::prelude::*;

#[component]
pub fn QuoteDisplay() -> Element {
    let app_state = use_context::<AppState>();
    let view = app_state.view.read().clone();

    let content = match view {
        QuoteView::Quote(quote) => {
            let text = quote.display_text();
            let category = quote.display_category();
            rsx! {
                p { class: "quote", "{text}" }
                p { class: "category", "{category}" }
            }
        }
        QuoteView::Empty(message) => rsx! {
            p { class: "placeholder", "{message}" }
        },
    };

    rsx! {
        div {
            id: "quoteDisplay",
            class: "quote-display glass",
            {content}
        }
    }
}
