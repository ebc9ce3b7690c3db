//! Close-contest filtering.
//!
//! The contests chart lets the reader pick a margin threshold from a fixed
//! list and shows every constituency won by at most that many votes.

use crate::config::NAIL_BITER_MARGIN;
use crate::dataset::ContestRecord;
use crate::formatting::format_votes;

/// Static closing line of the summary cards.
pub const IMPACT_TEXT: &str =
    "Every vote counts - these results could have changed with minimal vote shifts";

/// Selectable victory-margin thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarginThreshold {
    Under2k,
    #[default]
    Under5k,
    Under10k,
    Under25k,
}

impl MarginThreshold {
    /// All options in the order they appear in the dropdown.
    pub const ALL: [MarginThreshold; 4] = [
        MarginThreshold::Under2k,
        MarginThreshold::Under5k,
        MarginThreshold::Under10k,
        MarginThreshold::Under25k,
    ];

    /// Maximum margin, in votes, that passes the filter.
    pub fn votes(self) -> u32 {
        match self {
            MarginThreshold::Under2k => 2_000,
            MarginThreshold::Under5k => 5_000,
            MarginThreshold::Under10k => 10_000,
            MarginThreshold::Under25k => 25_000,
        }
    }

    /// Resolves a vote count back to an option. Values outside the list fall
    /// back to the default threshold.
    pub fn from_votes(votes: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.votes() == votes)
            .unwrap_or_default()
    }

    /// Parses the `<select>` value. Anything unparseable falls back to the
    /// default threshold.
    pub fn from_value(value: &str) -> Self {
        value
            .trim()
            .parse::<u32>()
            .map(Self::from_votes)
            .unwrap_or_default()
    }

    /// Dropdown label, e.g. `"Under 5,000 votes"`.
    pub fn label(self) -> String {
        format!("Under {} votes", format_votes(self.votes()))
    }
}

/// Keeps the records whose margin is at most `threshold`, in their original
/// order.
pub fn filter_close_contests(
    records: &[ContestRecord],
    threshold: MarginThreshold,
) -> Vec<ContestRecord> {
    let limit = threshold.votes();
    records
        .iter()
        .filter(|record| record.margin <= limit)
        .copied()
        .collect()
}

/// Counts shown in the cards under the contests chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestSummary {
    /// Constituencies decided by fewer than 1,000 votes
    pub nail_biters: usize,
    /// Constituencies under the selected threshold
    pub close_battles: usize,
    pub threshold: MarginThreshold,
}

impl ContestSummary {
    pub fn from_filtered(filtered: &[ContestRecord], threshold: MarginThreshold) -> Self {
        Self {
            nail_biters: filtered
                .iter()
                .filter(|r| r.margin < NAIL_BITER_MARGIN)
                .count(),
            close_battles: filtered.len(),
            threshold,
        }
    }

    pub fn nail_biter_text(&self) -> String {
        format!(
            "{} constituencies decided by less than {} votes",
            self.nail_biters,
            format_votes(NAIL_BITER_MARGIN)
        )
    }

    pub fn close_battle_text(&self) -> String {
        format!(
            "{} total constituencies with margins under {} votes",
            self.close_battles,
            format_votes(self.threshold.votes())
        )
    }

    pub fn impact_text(&self) -> &'static str {
        IMPACT_TEXT
    }
}
