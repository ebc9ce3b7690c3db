//! Hard-coded election datasets.
//!
//! Every record here is immutable. Filters and generators produce new derived
//! views; nothing in the crate edits these tables.

use serde::Serialize;

use crate::config::HISTORY_YEARS;

/// A single constituency result used by the close-contest chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContestRecord {
    /// Constituency name
    pub constituency: &'static str,
    /// Winning party code
    pub winner: &'static str,
    /// Votes between winner and runner-up
    pub margin: u32,
    /// State the constituency belongs to
    pub state: &'static str,
}

/// Seats won by one party, aligned positionally with [`HISTORY_YEARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartySeatSeries {
    pub party: &'static str,
    pub seats: &'static [u32],
}

impl PartySeatSeries {
    /// Iterates `(year, seats)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        HISTORY_YEARS.iter().copied().zip(self.seats.iter().copied())
    }
}

/// One cell of a turnout heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoutCell {
    pub constituency: &'static str,
    pub year: u16,
    /// Percentage of eligible voters, within [0, 100]
    pub turnout: f64,
}

/// Winning party for one region of the constituency map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegionResult {
    /// Feature id in the map geometry
    pub region_id: &'static str,
    pub winner: &'static str,
    /// Winner's share of the vote, within [0, 100]
    pub vote_share: f64,
    /// Hover label
    pub label: &'static str,
}

/// Headline figure on the intro section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroStat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn contest(
    constituency: &'static str,
    winner: &'static str,
    margin: u32,
    state: &'static str,
) -> ContestRecord {
    ContestRecord {
        constituency,
        winner,
        margin,
        state,
    }
}

/// Close contests of the 2019 general election, tightest first.
pub const CLOSE_CONTESTS: [ContestRecord; 10] = [
    contest("Chandni Chowk", "BJP", 1234, "Delhi"),
    contest("Patan", "INC", 1542, "Gujarat"),
    contest("Indore", "BJP", 2187, "Madhya Pradesh"),
    contest("Thiruvananthapuram", "INC", 2456, "Kerala"),
    contest("Amethi", "BJP", 2789, "Uttar Pradesh"),
    contest("Wayanad", "INC", 3234, "Kerala"),
    contest("Gandhinagar", "BJP", 3567, "Gujarat"),
    contest("Mumbai North", "BJP", 6123, "Maharashtra"),
    contest("Kolkata North", "TMC", 8456, "West Bengal"),
    contest("Chennai Central", "DMK", 12789, "Tamil Nadu"),
];

/// Lok Sabha seats for the major national parties, 1962 to 2019.
pub const SEAT_HISTORY: [PartySeatSeries; 4] = [
    PartySeatSeries {
        party: "BJP",
        seats: &[14, 35, 22, 2, 2, 2, 85, 120, 161, 182, 182, 138, 116, 282, 303],
    },
    PartySeatSeries {
        party: "INC",
        seats: &[361, 283, 352, 154, 353, 414, 197, 232, 140, 141, 114, 145, 206, 44, 52],
    },
    PartySeatSeries {
        party: "BSP",
        seats: &[0, 0, 0, 0, 0, 0, 3, 1, 0, 0, 0, 19, 21, 0, 10],
    },
    PartySeatSeries {
        party: "CPM",
        seats: &[29, 19, 25, 22, 35, 22, 33, 35, 32, 21, 17, 43, 16, 9, 3],
    },
];

const fn region(
    region_id: &'static str,
    winner: &'static str,
    vote_share: f64,
    label: &'static str,
) -> MapRegionResult {
    MapRegionResult {
        region_id,
        winner,
        vote_share,
        label,
    }
}

/// 2019 winners for the sample map regions.
pub const MAP_RESULTS: [MapRegionResult; 10] = [
    region("0", "BJP", 45.2, "Constituency A - BJP Won"),
    region("1", "INC", 38.7, "Constituency B - INC Won"),
    region("2", "AAP", 42.1, "Constituency C - AAP Won"),
    region("3", "BJP", 48.9, "Constituency D - BJP Won"),
    region("4", "INC", 41.3, "Constituency E - INC Won"),
    region("5", "BJP", 46.8, "Constituency F - BJP Won"),
    region("6", "AAP", 39.5, "Constituency G - AAP Won"),
    region("7", "INC", 44.2, "Constituency H - INC Won"),
    region("8", "BJP", 47.1, "Constituency I - BJP Won"),
    region("9", "AAP", 40.8, "Constituency J - AAP Won"),
];

pub const INTRO_STATS: [IntroStat; 4] = [
    IntroStat {
        value: "543",
        label: "Constituencies",
        icon: "👥",
    },
    IntroStat {
        value: "15+",
        label: "Elections Analyzed",
        icon: "📊",
    },
    IntroStat {
        value: "28",
        label: "States & UTs",
        icon: "📍",
    },
    IntroStat {
        value: "1M+",
        label: "Data Points",
        icon: "🗄️",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_series_align_with_years() {
        for series in &SEAT_HISTORY {
            assert_eq!(
                series.seats.len(),
                HISTORY_YEARS.len(),
                "{} series is misaligned",
                series.party
            );
        }
    }

    #[test]
    fn test_points_pairs_years_and_seats() {
        let bjp = &SEAT_HISTORY[0];
        let last = bjp.points().last().unwrap();
        assert_eq!(last, (2019, 303));
        assert_eq!(bjp.points().count(), 15);
    }

    #[test]
    fn test_vote_shares_are_percentages() {
        for result in &MAP_RESULTS {
            assert!((0.0..=100.0).contains(&result.vote_share));
        }
    }

    #[test]
    fn test_contest_margins_ascending() {
        assert!(CLOSE_CONTESTS.windows(2).all(|w| w[0].margin <= w[1].margin));
    }
}
