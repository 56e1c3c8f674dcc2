//! Add-quote form

use crate::app::AppState;
use dioxus::prelude::*;

/// Submit the form, clearing the inputs once the quote is accepted
fn submit(app_state: &mut AppState, mut text: Signal<String>, mut category: Signal<String>) {
    if app_state.add_quote(&text(), &category()) {
        text.set(String::new());
        category.set(String::new());
    }
}

#[component]
pub fn AddQuoteForm() -> Element {
    let mut text = use_signal(String::new);
    let mut category = use_signal(String::new);
    let app_state = use_context::<AppState>();
    let mut app_state_enter = app_state.clone();
    let mut app_state_click = app_state.clone();

    rsx! {
        div {
            class: "add-quote glass",

            h2 { class: "section-title", "Add a Quote" }

            input {
                id: "newQuoteText",
                r#type: "text",
                placeholder: "Enter a new quote",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            input {
                id: "newQuoteCategory",
                r#type: "text",
                placeholder: "Enter quote category",
                value: "{category}",
                oninput: move |evt| category.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        submit(&mut app_state_enter, text, category);
                    }
                },
            }
            button {
                id: "addQuoteBtn",
                class: "btn btn-primary",
                onclick: move |_| submit(&mut app_state_click, text, category),
                "Add Quote"
            }
        }
    }
}
