//! Confirmation dialog for clearing all quotes

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog() -> Element {
    let app_state = use_context::<AppState>();
    if !*app_state.confirm_clear.read() {
        return rsx! { div {} };
    }

    let quote_count = app_state.store.read().len();
    let mut confirm_clear = app_state.confirm_clear;
    let mut app_state_confirm = app_state.clone();

    rsx! {
        // Backdrop
        div {
            class: "backdrop",

            div {
                class: "dialog glass-strong animate-scale-in",

                div {
                    class: "dialog-header",
                    div {
                        class: "warning-icon",
                        svg {
                            width: "20",
                            height: "20",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" }
                            line { x1: "12", y1: "9", x2: "12", y2: "13" }
                            line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
                        }
                    }
                    h2 { class: "dialog-title", "Clear all quotes?" }
                }

                p {
                    class: "dialog-message",
                    "All {quote_count} quotes will be removed. This cannot be undone."
                }

                div {
                    class: "dialog-actions",
                    button {
                        class: "btn",
                        onclick: move |_| confirm_clear.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| app_state_confirm.clear_quotes(),
                        "Clear"
                    }
                }
            }
        }
    }
}
