//! Alert dialog
//!
//! Blocking message with a single OK button

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn AlertDialog() -> Element {
    let app_state = use_context::<AppState>();
    let Some(message) = app_state.alert.read().clone() else {
        return rsx! { div {} };
    };
    let mut alert = app_state.alert;

    rsx! {
        div {
            class: "backdrop",

            div {
                class: "dialog glass-strong animate-scale-in",

                p { class: "dialog-message", "{message}" }

                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-primary",
                        autofocus: true,
                        onclick: move |_| alert.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}
