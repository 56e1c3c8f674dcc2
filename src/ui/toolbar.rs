//! Category filter and the list actions (export, import, clear, server load)

use crate::app::AppState;
use crate::quotes::ALL_CATEGORIES;
use crate::sync::SyncTrigger;
use dioxus::prelude::*;

#[component]
pub fn CategorySelect() -> Element {
    let app_state = use_context::<AppState>();
    let (categories, selected) = {
        let store = app_state.store.read();
        (store.categories(), store.filter().as_str().to_string())
    };
    let mut app_state_select = app_state.clone();

    rsx! {
        div {
            class: "filter-row",

            label { r#for: "categoryFilter", "Filter by category" }

            select {
                id: "categoryFilter",
                value: "{selected}",
                onchange: move |evt| app_state_select.select_category(&evt.value()),

                option {
                    value: ALL_CATEGORIES,
                    selected: selected == ALL_CATEGORIES,
                    "All Categories"
                }
                for category in categories {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: category == selected,
                        "{category}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Toolbar() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_export = app_state.clone();
    let mut app_state_import = app_state.clone();
    let mut app_state_clear = app_state.clone();
    let app_state_load = app_state.clone();
    let quote_count = app_state.store.read().len();

    rsx! {
        div {
            class: "toolbar",

            span { class: "count", "{quote_count} quotes" }

            button {
                id: "exportBtn",
                class: "btn",
                onclick: move |_| app_state_export.export_quotes(),
                "Export Quotes"
            }
            button {
                id: "importFile",
                class: "btn",
                onclick: move |_| app_state_import.import_quotes(),
                "Import Quotes"
            }
            button {
                id: "loadFromServer",
                class: "btn",
                onclick: move |_| {
                    let mut app_state = app_state_load.clone();
                    spawn(async move {
                        app_state.sync_from_server(SyncTrigger::Manual).await;
                    });
                },
                "Load from Server"
            }
            button {
                id: "clearQuotes",
                class: "btn btn-danger",
                onclick: move |_| app_state_clear.confirm_clear.set(true),
                "Clear All Quotes"
            }
        }
    }
}
