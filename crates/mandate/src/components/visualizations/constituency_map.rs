use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use mandate_core::chart::constituency_map_figure;
use mandate_core::config::MAP_LOAD_DELAY_MS;
use mandate_core::dataset::MAP_RESULTS;
use mandate_core::loading::LoadPhase;
use mandate_core::party::MAP_LEGEND;
use mandate_core::MandateError;

use super::PlotlyChart;
use crate::platform::sleep_ms;

/// Waits out the mock loading delay, then serialises the map figure.
async fn load_map_figure() -> Result<String, MandateError> {
    sleep_ms(MAP_LOAD_DELAY_MS).await;
    constituency_map_figure(&MAP_RESULTS).to_json()
}

/// Choropleth of constituency winners.
///
/// Shows a spinner for [`MAP_LOAD_DELAY_MS`] before revealing the map. The
/// delay future is owned by the component, so leaving the tab early drops it
/// without touching state.
#[component]
pub fn ConstituencyMap() -> Element {
    let mut phase = use_signal(LoadPhase::<String>::default);

    use_future(move || async move {
        match load_map_figure().await {
            Ok(json) => {
                if phase.write().resolve(json) {
                    info!("Constituency map ready");
                }
            }
            Err(e) => error!("Failed to build constituency map: {}", e),
        }
    });

    let figure_json = phase.read().ready().cloned();

    rsx! {
        div { class: "mn-chart-card",
            div { class: "mn-chart-header",
                h3 { class: "mn-chart-title", "🗺️ Constituency Map (2019 Elections)" }
                p { class: "mn-chart-intro",
                    "Begin your journey with our interactive Constituency Map, providing a granular view "
                    "of election outcomes across India. Each constituency is color-coded by winning party."
                }
            }
            {match figure_json {
                Some(json) => rsx! {
                    PlotlyChart { id: "constituency-map", figure_json: json }
                    div { class: "mn-legend",
                        for (party, color) in MAP_LEGEND {
                            div { key: "{party}", class: "mn-legend-item",
                                span { class: "mn-legend-swatch", style: "background-color: {color};" }
                                span { "{party}" }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "mn-loading",
                        div { class: "mn-spinner" }
                        p { "Loading constituency data..." }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_map_loads_once_after_delay() {
        let mut phase = LoadPhase::<String>::default();
        let load = load_map_figure();
        tokio::pin!(load);

        let early =
            tokio::time::timeout(Duration::from_millis(MAP_LOAD_DELAY_MS - 1), &mut load).await;
        assert!(early.is_err());
        assert!(phase.is_loading());

        let json = load.await.unwrap();
        assert!(json.contains("\"type\":\"choropleth\""));
        assert!(phase.resolve(json));
        assert!(!phase.is_loading());

        // A second completion leaves the first figure in place
        let again = load_map_figure().await.unwrap();
        assert!(!phase.resolve(again));
        assert!(phase.ready().is_some());
    }
}
