use crate::app::AppState;
use dioxus::prelude::*;

/// Transient banner, e.g. after a timed sync
#[component]
pub fn NotificationBanner() -> Element {
    let app_state = use_context::<AppState>();
    let Some(message) = app_state.banner.read().message().map(str::to_string) else {
        return rsx! { div {} };
    };

    rsx! {
        div {
            id: "notification",
            class: "notification animate-fade-in",
            "{message}"
        }
    }
}
