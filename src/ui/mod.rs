//! UI components for QuoteBook
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod add_quote;
pub mod components;
pub mod quote_display;
pub mod theme;
pub mod toolbar;

use crate::app::AppState;
use crate::ui::add_quote::AddQuoteForm;
use crate::ui::components::{AlertDialog, ConfirmDialog, NotificationBanner};
use crate::ui::quote_display::QuoteDisplay;
use crate::ui::theme::STYLES;
use crate::ui::toolbar::{CategorySelect, Toolbar};
use dioxus::prelude::*;

/// Main window layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_new_quote = app_state.clone();

    rsx! {
        style { "{STYLES}" }

        div {
            class: "app",

            h1 { class: "title", "Dynamic Quote Generator" }

            NotificationBanner {}

            CategorySelect {}

            QuoteDisplay {}

            button {
                id: "newQuote",
                class: "btn btn-primary",
                onclick: move |_| app_state_new_quote.show_new_quote(),
                "Show New Quote"
            }

            AddQuoteForm {}

            Toolbar {}
        }

        AlertDialog {}
        ConfirmDialog {}
    }
}
