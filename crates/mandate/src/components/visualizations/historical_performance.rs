use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use mandate_core::chart::historical_figure;
use mandate_core::config::HISTORY_YEARS;
use mandate_core::dataset::SEAT_HISTORY;
use mandate_core::history::key_insights;

use super::PlotlyChart;

/// Seat counts per party across general elections, plus the written insights.
#[component]
pub fn HistoricalPerformance() -> Element {
    let figure_json = use_hook(|| {
        historical_figure(&SEAT_HISTORY, &HISTORY_YEARS)
            .to_json()
            .map_err(|e| error!("Failed to build historical chart: {}", e))
            .ok()
    });
    let insights = use_hook(|| key_insights(&SEAT_HISTORY));

    rsx! {
        div { class: "mn-chart-card",
            div { class: "mn-chart-header",
                h3 { class: "mn-chart-title", "📈 Historical Party Performance (1962-2019)" }
                p { class: "mn-chart-intro",
                    "Delve into the past with our Historical Performance Graph, showcasing long-term trends "
                    "and shifts for major political parties over successive elections."
                }
            }
            if let Some(json) = figure_json {
                PlotlyChart { id: "historical-performance", figure_json: json }
            } else {
                p { class: "mn-chart-error", "Chart unavailable" }
            }
            div { class: "mn-insights",
                h4 { class: "mn-insights-title", "Key Insights:" }
                ul {
                    for (i, insight) in insights.iter().enumerate() {
                        li { key: "{i}", "{insight}" }
                    }
                }
            }
        }
    }
}
