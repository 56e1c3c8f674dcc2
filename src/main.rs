use dioxus::desktop::{Config, WindowBuilder};
use quotebook::app::App;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    tracing::info!("Starting QuoteBook");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(WindowBuilder::new().with_title("QuoteBook")),
        )
        .launch(App);
}
