use dioxus::prelude::*;
use mandate::components::App as MandateApp;

const MAIN_CSS: Asset = asset!("/assets/mandate.css");

/// Plotly.js bundle used by every chart on the page.
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Indian Elections")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1280.0, 900.0))
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Indian Elections | Data-Driven Democracy" }

        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/mandate.css")} }
        }
        document::Script { src: PLOTLY_JS }

        MandateApp {}
    }
}
