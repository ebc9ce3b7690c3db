//! Tabbed chart browser.
//!
//! [`VisualizationSection`] owns a [`TabSelector`] and mounts exactly one
//! chart component at a time. Switching tabs unmounts the previous chart, so
//! each chart starts from its default filter when revisited.

mod close_contests;
mod constituency_map;
mod historical_performance;
mod plot;
mod turnout_heatmap;

pub use close_contests::CloseContests;
pub use constituency_map::ConstituencyMap;
pub use historical_performance::HistoricalPerformance;
pub use plot::PlotlyChart;
pub use turnout_heatmap::TurnoutHeatmap;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use mandate_core::tabs::{TabSelector, VisualizationTab};

const GUIDE: [(&str, &str); 3] = [
    ("🖱️ Hover", "Reveal detailed data points and insights"),
    ("🔍 Zoom & Pan", "Navigate maps and charts for closer examination"),
    ("🎛️ Filter", "Customize views by state, party, or time period"),
];

#[component]
pub fn VisualizationSection() -> Element {
    let mut selector = use_signal(TabSelector::new);
    let active = selector.read().active();

    rsx! {
        section { id: "visualizations", class: "mn-visualizations",
            div { class: "mn-container",
                div { class: "mn-center mn-rise",
                    h2 { class: "mn-section-title", "Interactive Data Visualizations" }
                    div { class: "mn-rule mn-rule--saffron" }
                    p { class: "mn-lead",
                        "Each chart is designed for clarity, deep-dive exploration, and an immersive "
                        "understanding of the electoral landscape."
                    }
                }

                nav { class: "mn-tabs", role: "tablist",
                    for tab in VisualizationTab::ALL {
                        button {
                            key: "{tab.id()}",
                            role: "tab",
                            "aria-selected": tab == active,
                            class: if tab == active { "mn-tab mn-tab--active" } else { "mn-tab" },
                            onclick: move |_| {
                                // Reselecting the active tab must not trigger a re-render
                                if !selector.peek().is_active(tab) && selector.write().select(tab) {
                                    info!("Visualization tab: {}", tab.label());
                                }
                            },
                            span { class: "mn-tab-icon", "{tab.icon()}" }
                            span { "{tab.label()}" }
                        }
                    }
                }
                p { class: "mn-tab-description", "{active.description()}" }

                div { class: "mn-chart-container",
                    div { key: "{active.id()}", class: "mn-chart-panel mn-fade-up",
                        {match active {
                            VisualizationTab::Map => rsx! { ConstituencyMap {} },
                            VisualizationTab::Performance => rsx! { HistoricalPerformance {} },
                            VisualizationTab::Turnout => rsx! { TurnoutHeatmap {} },
                            VisualizationTab::Contests => rsx! { CloseContests {} },
                        }}
                    }
                }

                div { class: "mn-guide",
                    h3 { class: "mn-guide-title", "💡 Interactivity Guide" }
                    div { class: "mn-guide-grid",
                        for (title, text) in GUIDE {
                            div { key: "{title}", class: "mn-guide-item",
                                div { class: "mn-guide-item-title", "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
