//! Historical seat trajectories.
//!
//! The insight lines under the performance chart are derived from the seat
//! series rather than typed by hand, so they stay consistent with the chart.

use crate::dataset::PartySeatSeries;

/// Qualitative observations appended after the derived ones.
pub const STATIC_INSIGHTS: [&str; 2] = [
    "Regional parties gaining prominence in coalition politics",
    "Shift from Congress dominance to multi-party competition",
];

/// Summary of one party's seat series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trajectory {
    pub party: &'static str,
    /// `(year, seats)` of the best result; earliest year on ties
    pub peak: (u16, u32),
    /// `(year, seats)` of the worst result; latest year on ties
    pub low: (u16, u32),
    /// `(year, seats)` of the most recent election
    pub latest: (u16, u32),
}

impl Trajectory {
    /// Returns `None` for an empty series.
    pub fn from_series(series: &PartySeatSeries) -> Option<Self> {
        let mut points = series.points();
        let first = points.next()?;
        let (peak, low, latest) = points.fold((first, first, first), |(peak, low, _), p| {
            let peak = if p.1 > peak.1 { p } else { peak };
            let low = if p.1 <= low.1 { p } else { low };
            (peak, low, p)
        });
        Some(Self {
            party: series.party,
            peak,
            low,
            latest,
        })
    }

    /// Whether the latest result is the peak (the party is at its high point).
    pub fn is_rising(&self) -> bool {
        self.latest.1 >= self.peak.1
    }

    /// One-line description of the trajectory.
    ///
    /// Rising parties are described from their low to the latest result,
    /// declining ones from their peak to the latest result.
    pub fn insight(&self) -> String {
        if self.is_rising() {
            format!(
                "{}'s rise from {} seats ({}) to {} seats ({})",
                self.party, self.low.1, self.low.0, self.latest.1, self.latest.0
            )
        } else {
            format!(
                "{}'s decline from its peak of {} seats ({}) to {} seats ({})",
                self.party, self.peak.1, self.peak.0, self.latest.1, self.latest.0
            )
        }
    }
}

/// Insight lines for the two leading parties followed by [`STATIC_INSIGHTS`].
///
/// "Leading" means the highest peak across the series.
pub fn key_insights(series: &[PartySeatSeries]) -> Vec<String> {
    let mut trajectories: Vec<Trajectory> =
        series.iter().filter_map(Trajectory::from_series).collect();
    trajectories.sort_by(|a, b| b.peak.1.cmp(&a.peak.1));

    let mut insights: Vec<String> = trajectories
        .iter()
        .take(2)
        .map(Trajectory::insight)
        .collect();
    // Rising party first reads better
    insights.sort_by_key(|line| !line.contains("'s rise"));
    insights.extend(STATIC_INSIGHTS.iter().map(|s| s.to_string()));
    insights
}
