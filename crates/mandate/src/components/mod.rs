//! UI components for the Mandate dashboard.
//!
//! # Component Tree
//!
//! - [`App`]: owns the [`ShellPhase`] and shows either the splash or the page
//! - `splash`: entry screen with the "Explore Now" action
//! - `app_shell`: Header and Footer
//! - `intro`: headline statistics
//! - `visualizations`: tab bar plus the four chart components
//!
//! Each chart keeps its own filter in a local signal; nothing is shared
//! through context.

mod app_shell;
mod intro;
mod splash;
pub mod visualizations;

pub use app_shell::{Footer, Header};
pub use intro::IntroSection;
pub use splash::SplashScreen;
pub use visualizations::VisualizationSection;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use mandate_core::shell::ShellPhase;

#[component]
pub fn App() -> Element {
    let mut phase = use_signal(ShellPhase::default);

    let handle_enter = move |_| {
        // Only write when the phase actually changes
        if phase.peek().shows_splash() && phase.write().enter() {
            info!("Entering main page");
        }
    };

    rsx! {
        div { class: "mn-app",
            if phase().shows_splash() {
                SplashScreen { on_enter: handle_enter }
            } else {
                div { class: "mn-page mn-fade-in",
                    Header {}
                    IntroSection {}
                    VisualizationSection {}
                    Footer {}
                }
            }
        }
    }
}
