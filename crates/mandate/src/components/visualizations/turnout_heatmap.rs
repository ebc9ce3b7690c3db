use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use mandate_core::chart::turnout_figure;
use mandate_core::formatting::format_percent;
use mandate_core::turnout::{TurnoutSelection, DEFAULT_STATE, TURNOUT_STATES};

use super::PlotlyChart;
use crate::platform::entropy_seed;

const FACTORS: [(&str, [&str; 4]); 2] = [
    (
        "High Turnout Indicators:",
        [
            "Strong local leadership",
            "Competitive contests",
            "Effective voter education",
            "Accessible polling stations",
        ],
    ),
    (
        "Factors Affecting Turnout:",
        [
            "Weather conditions",
            "Urban vs rural dynamics",
            "Security concerns",
            "Voter apathy in safe seats",
        ],
    ),
];

/// Heatmap of mock turnout figures for the selected state.
///
/// Every selection, including re-selecting the current state, draws a fresh
/// grid from a new seed.
#[component]
pub fn TurnoutHeatmap() -> Element {
    let mut selection = use_signal(|| TurnoutSelection::new(DEFAULT_STATE, entropy_seed()));

    let figure_json = use_memo(move || {
        turnout_figure(selection.read().matrix())
            .to_json()
            .map_err(|e| error!("Failed to build turnout heatmap: {}", e))
            .ok()
    });

    let selected = selection.read().state();
    let average = selection
        .read()
        .matrix()
        .mean()
        .map(format_percent)
        .unwrap_or_default();

    rsx! {
        div { class: "mn-chart-card",
            div { class: "mn-chart-header",
                h3 { class: "mn-chart-title", "🔥 Voter Turnout Heatmap" }
                p { class: "mn-chart-intro",
                    "Understand the pulse of the electorate with our Voter Turnout Heatmap, "
                    "illustrating participation levels across different regions."
                }
                label { class: "mn-select-label",
                    "Select State:"
                    select {
                        class: "mn-select",
                        value: "{selected}",
                        onchange: move |evt: Event<FormData>| {
                            let name = evt.value();
                            if let Err(e) = selection.write().select(&name, entropy_seed()) {
                                warn!("Ignoring turnout selection: {}", e);
                            }
                        },
                        for state in TURNOUT_STATES {
                            option { key: "{state}", value: "{state}", selected: state == selected, "{state}" }
                        }
                    }
                }
            }
            if let Some(json) = figure_json() {
                PlotlyChart { id: "turnout-heatmap", figure_json: json }
            } else {
                p { class: "mn-chart-error", "Chart unavailable" }
            }
            p { class: "mn-chart-note", "Average turnout across constituencies: {average}" }
            div { class: "mn-factor-grid",
                for (title, items) in FACTORS {
                    div { key: "{title}", class: "mn-factor-card",
                        h4 { "{title}" }
                        ul {
                            for item in items {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_cards_list_four_items_each() {
        assert_eq!(FACTORS[0].0, "High Turnout Indicators:");
        assert_eq!(FACTORS[1].0, "Factors Affecting Turnout:");
        assert!(FACTORS[0].1.contains(&"Competitive contests"));
        assert!(FACTORS[1].1.contains(&"Voter apathy in safe seats"));
    }
}
