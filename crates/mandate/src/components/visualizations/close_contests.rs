use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use mandate_core::chart::close_contests_figure;
use mandate_core::contests::{filter_close_contests, ContestSummary, MarginThreshold};
use mandate_core::dataset::CLOSE_CONTESTS;

use super::PlotlyChart;

const CARD_TITLES: [(&str, &str); 3] = [
    ("🎯", "Nail-biting Finishes:"),
    ("⚖️", "Close Battles:"),
    ("📊", "Impact Factor:"),
];

/// Bar chart of contests decided within the selected margin.
#[component]
pub fn CloseContests() -> Element {
    let mut threshold = use_signal(MarginThreshold::default);

    let filtered = use_memo(move || filter_close_contests(&CLOSE_CONTESTS, threshold()));
    let summary = use_memo(move || ContestSummary::from_filtered(&filtered.read(), threshold()));
    let figure_json = use_memo(move || {
        close_contests_figure(&filtered.read(), threshold())
            .to_json()
            .map_err(|e| error!("Failed to build close contests chart: {}", e))
            .ok()
    });

    let current = threshold();
    let summary = summary();
    let cards = CARD_TITLES.into_iter().zip([
        summary.nail_biter_text(),
        summary.close_battle_text(),
        summary.impact_text().to_string(),
    ]);

    rsx! {
        div { class: "mn-chart-card",
            div { class: "mn-chart-header",
                h3 { class: "mn-chart-title", "⚔️ Close Contest Analysis" }
                p { class: "mn-chart-intro",
                    "Experience the tension with our Close Contest Bar Graph, highlighting constituencies "
                    "where the margin of victory was razor-thin."
                }
                label { class: "mn-select-label",
                    "Victory Margin Threshold:"
                    select {
                        class: "mn-select",
                        value: "{current.votes()}",
                        onchange: move |evt: Event<FormData>| {
                            let next = MarginThreshold::from_value(&evt.value());
                            // Same threshold means same chart; skip the write
                            if *threshold.peek() != next {
                                debug!("Margin threshold: {}", next.votes());
                                threshold.set(next);
                            }
                        },
                        for choice in MarginThreshold::ALL {
                            option {
                                key: "{choice.votes()}",
                                value: "{choice.votes()}",
                                selected: choice == current,
                                "{choice.label()}"
                            }
                        }
                    }
                }
            }
            if let Some(json) = figure_json() {
                PlotlyChart { id: "close-contests", figure_json: json }
            } else {
                p { class: "mn-chart-error", "Chart unavailable" }
            }
            div { class: "mn-summary-grid",
                for ((icon, title), text) in cards {
                    div { key: "{title}", class: "mn-summary-card",
                        div { class: "mn-summary-icon", "{icon}" }
                        h4 { "{title}" }
                        p { "{text}" }
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
    fn test_summary_cards_follow_dropdown_threshold() {
        let threshold = MarginThreshold::from_value("2000");
        let filtered = filter_close_contests(&CLOSE_CONTESTS, threshold);
        let summary = ContestSummary::from_filtered(&filtered, threshold);

        let titles: Vec<&str> = CARD_TITLES.iter().map(|(_, title)| *title).collect();
        assert_eq!(
            titles,
            ["Nail-biting Finishes:", "Close Battles:", "Impact Factor:"]
        );
        assert_eq!(
            summary.close_battle_text(),
            "2 total constituencies with margins under 2,000 votes"
        );
    }
}
