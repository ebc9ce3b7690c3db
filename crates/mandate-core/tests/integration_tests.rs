//! End-to-end tests of the dashboard's page state.
//!
//! These walk the same sequence a reader does: splash, enter, switch tabs,
//! change each chart's filter, and check what would be handed to Plotly.
//!
//! Run with: `cargo test -p mandate-core --test integration_tests`

use mandate_core::chart::{
    close_contests_figure, constituency_map_figure, historical_figure, turnout_figure,
};
use mandate_core::config::{HISTORY_YEARS, TURNOUT_MAX, TURNOUT_MIN};
use mandate_core::contests::{filter_close_contests, ContestSummary, MarginThreshold};
use mandate_core::dataset::{CLOSE_CONTESTS, MAP_RESULTS, SEAT_HISTORY};
use mandate_core::history::key_insights;
use mandate_core::loading::LoadPhase;
use mandate_core::shell::ShellPhase;
use mandate_core::tabs::{TabSelector, VisualizationTab};
use mandate_core::turnout::{TurnoutSelection, DEFAULT_STATE, TURNOUT_STATES};

// ============================================================================
// Shell and Tabs
// ============================================================================

#[test]
fn test_splash_never_returns_after_enter() {
    let mut shell = ShellPhase::default();
    assert!(shell.shows_splash());

    shell.enter();
    let mut tabs = TabSelector::new();
    for id in ["turnout", "contests", "bogus", "map", "performance"] {
        tabs.select_id(id);
        shell.enter();
        assert!(!shell.shows_splash());
    }
}

#[test]
fn test_every_tab_renders_exclusively() {
    let mut tabs = TabSelector::new();
    for id in ["map", "performance", "turnout", "contests"] {
        tabs.select_id(id);
        assert_eq!(tabs.active().id(), id);
        let visible = VisualizationTab::ALL
            .iter()
            .filter(|t| tabs.is_active(**t))
            .count();
        assert_eq!(visible, 1);
    }
}

#[test]
fn test_unknown_tab_yields_map() {
    let mut tabs = TabSelector::new();
    tabs.select(VisualizationTab::Performance);
    tabs.select_id("regional-dominance");
    assert_eq!(tabs.active(), VisualizationTab::Map);
}

// ============================================================================
// Close Contests
// ============================================================================

#[test]
fn test_threshold_sweep_over_dataset() {
    let expected = [
        (MarginThreshold::Under2k, 2),
        (MarginThreshold::Under5k, 7),
        (MarginThreshold::Under10k, 9),
        (MarginThreshold::Under25k, 10),
    ];
    for (threshold, count) in expected {
        let filtered = filter_close_contests(&CLOSE_CONTESTS, threshold);
        assert_eq!(filtered.len(), count, "threshold {:?}", threshold);

        let summary = ContestSummary::from_filtered(&filtered, threshold);
        assert_eq!(summary.nail_biters, 0);
        assert_eq!(summary.close_battles, count);

        let figure = close_contests_figure(&filtered, threshold).to_value().unwrap();
        assert_eq!(
            figure["data"][0]["y"].as_array().unwrap().len(),
            count
        );
    }
}

#[test]
fn test_reselecting_threshold_renders_identically() {
    let threshold = MarginThreshold::from_value("5000");
    let first = close_contests_figure(&filter_close_contests(&CLOSE_CONTESTS, threshold), threshold)
        .to_json()
        .unwrap();
    let again = MarginThreshold::from_value("5000");
    let second = close_contests_figure(&filter_close_contests(&CLOSE_CONTESTS, again), again)
        .to_json()
        .unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Turnout
// ============================================================================

#[test]
fn test_turnout_for_every_state() {
    let mut selection = TurnoutSelection::new(DEFAULT_STATE, 0);
    for (i, state) in TURNOUT_STATES.iter().enumerate() {
        selection.select(state, i as u64 + 1).unwrap();
        let matrix = selection.matrix();
        assert_eq!(matrix.values.len(), 10);
        for row in &matrix.values {
            assert_eq!(row.len(), 4);
            assert!(row.iter().all(|v| (TURNOUT_MIN..TURNOUT_MAX).contains(v)));
        }

        let figure = turnout_figure(matrix).to_value().unwrap();
        assert_eq!(
            figure["layout"]["title"]["text"],
            format!("Top 10 Turnout Constituencies in {}", state)
        );
    }
    assert_eq!(selection.generation(), TURNOUT_STATES.len() as u64 + 1);
}

// ============================================================================
// Map and History
// ============================================================================

#[test]
fn test_map_loads_once_then_renders() {
    let mut phase = LoadPhase::default();
    assert!(phase.is_loading());

    assert!(phase.resolve(constituency_map_figure(&MAP_RESULTS)));
    assert!(!phase.resolve(constituency_map_figure(&[])));

    let figure = phase.ready().unwrap().to_value().unwrap();
    assert_eq!(figure["data"][0]["locations"].as_array().unwrap().len(), 10);
}

#[test]
fn test_history_chart_and_insights_agree() {
    let figure = historical_figure(&SEAT_HISTORY, &HISTORY_YEARS)
        .to_value()
        .unwrap();
    let bjp = &figure["data"][0];
    assert_eq!(bjp["y"].as_array().unwrap().last().unwrap(), 303);

    let insights = key_insights(&SEAT_HISTORY);
    assert!(insights[0].contains("303 seats (2019)"));
    assert!(insights[1].contains("414 seats (1984)"));
}
