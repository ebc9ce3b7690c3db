//! Turnout heatmap data.
//!
//! There is no turnout dataset behind the heatmap. Each time a state is
//! picked, a fresh 10 x 4 grid of plausible turnout values is drawn. The
//! generator takes its RNG explicitly; callers decide whether the values are
//! reproducible by how they seed it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{TURNOUT_CONSTITUENCIES, TURNOUT_MAX, TURNOUT_MIN, TURNOUT_YEARS};
use crate::dataset::TurnoutCell;
use crate::error::MandateError;

/// States offered by the heatmap's dropdown.
pub const TURNOUT_STATES: [&str; 10] = [
    "Uttar Pradesh",
    "Maharashtra",
    "West Bengal",
    "Bihar",
    "Tamil Nadu",
    "Karnataka",
    "Gujarat",
    "Rajasthan",
    "Odisha",
    "Kerala",
];

pub const DEFAULT_STATE: &str = TURNOUT_STATES[0];

/// Finds `name` in [`TURNOUT_STATES`].
pub fn lookup_state(name: &str) -> Result<&'static str, MandateError> {
    TURNOUT_STATES
        .iter()
        .copied()
        .find(|state| *state == name)
        .ok_or_else(|| MandateError::UnknownState(name.to_string()))
}

/// Turnout percentages for one state, rows by constituency, columns by year.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnoutMatrix {
    pub state: &'static str,
    pub constituencies: &'static [&'static str],
    pub years: &'static [u16],
    pub values: Vec<Vec<f64>>,
}

impl TurnoutMatrix {
    /// Chart title, e.g. `"Top 10 Turnout Constituencies in Kerala"`.
    pub fn title(&self) -> String {
        format!("Top 10 Turnout Constituencies in {}", self.state)
    }

    /// Flattens the grid row by row.
    pub fn cells(&self) -> Vec<TurnoutCell> {
        self.constituencies
            .iter()
            .copied()
            .zip(&self.values)
            .flat_map(|(constituency, row)| {
                self.years.iter().zip(row).map(move |(year, turnout)| TurnoutCell {
                    constituency,
                    year: *year,
                    turnout: *turnout,
                })
            })
            .collect()
    }

    /// Mean over every cell, or `None` for an empty grid.
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .values
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        (count > 0).then(|| sum / count as f64)
    }
}

/// Draws a turnout grid for `state` with every cell in
/// `[TURNOUT_MIN, TURNOUT_MAX)`.
pub fn generate_turnout<R: Rng>(state: &'static str, rng: &mut R) -> TurnoutMatrix {
    let values = TURNOUT_CONSTITUENCIES
        .iter()
        .map(|_| {
            TURNOUT_YEARS
                .iter()
                .map(|_| rng.random_range(TURNOUT_MIN..TURNOUT_MAX))
                .collect()
        })
        .collect();

    TurnoutMatrix {
        state,
        constituencies: &TURNOUT_CONSTITUENCIES,
        years: &TURNOUT_YEARS,
        values,
    }
}

/// [`generate_turnout`] with a fresh RNG seeded from `seed`.
pub fn generate_turnout_seeded(state: &'static str, seed: u64) -> TurnoutMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_turnout(state, &mut rng)
}

/// The heatmap's local state: the selected state and its current grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnoutSelection {
    matrix: TurnoutMatrix,
    generation: u64,
}

impl TurnoutSelection {
    pub fn new(state: &'static str, seed: u64) -> Self {
        Self {
            matrix: generate_turnout_seeded(state, seed),
            generation: 1,
        }
    }

    pub fn state(&self) -> &'static str {
        self.matrix.state
    }

    pub fn matrix(&self) -> &TurnoutMatrix {
        &self.matrix
    }

    /// Number of grids drawn so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Selects `name` and draws a new grid, even if `name` is already
    /// selected. Unknown names leave the selection untouched.
    pub fn select(&mut self, name: &str, seed: u64) -> Result<(), MandateError> {
        let state = lookup_state(name)?;
        if state == self.matrix.state {
            debug!("Re-selected {}, regenerating turnout", state);
        }
        self.matrix = generate_turnout_seeded(state, seed);
        self.generation += 1;
        info!(
            "Generated turnout grid #{} for {}",
            self.generation, state
        );
        Ok(())
    }
}
