//! Compile-time configuration constants.
//!
//! Everything the dashboard treats as fixed lives here so the components and
//! the tests agree on the same values.
//!
//! # Usage
//!
//! ```
//! use mandate_core::config::{TURNOUT_MAX, TURNOUT_MIN, TURNOUT_YEARS};
//!
//! assert_eq!(TURNOUT_YEARS.len(), 4);
//! assert!(TURNOUT_MIN < TURNOUT_MAX);
//! ```

// =============================================================================
// Mock Loading
// =============================================================================

/// Delay before the constituency map reveals its results, in milliseconds.
pub const MAP_LOAD_DELAY_MS: u64 = 1000;

// =============================================================================
// Turnout Heatmap
// =============================================================================

/// Election years shown as heatmap columns.
pub const TURNOUT_YEARS: [u16; 4] = [2004, 2009, 2014, 2019];

/// Constituency labels shown as heatmap rows.
pub const TURNOUT_CONSTITUENCIES: [&str; 10] = [
    "Constituency A",
    "Constituency B",
    "Constituency C",
    "Constituency D",
    "Constituency E",
    "Constituency F",
    "Constituency G",
    "Constituency H",
    "Constituency I",
    "Constituency J",
];

/// Inclusive lower bound of generated turnout percentages.
pub const TURNOUT_MIN: f64 = 50.0;

/// Exclusive upper bound of generated turnout percentages.
pub const TURNOUT_MAX: f64 = 80.0;

// =============================================================================
// Close Contests
// =============================================================================

/// Margins strictly below this count as "nail-biting finishes".
pub const NAIL_BITER_MARGIN: u32 = 1000;

// =============================================================================
// Historical Performance
// =============================================================================

/// Lok Sabha general election years covered by the seat series.
pub const HISTORY_YEARS: [u16; 15] = [
    1962, 1967, 1971, 1977, 1980, 1984, 1989, 1991, 1996, 1998, 1999, 2004, 2009, 2014, 2019,
];

/// Upper bound of the seats axis. The house has 543 seats, but no party in the
/// dataset passes 450.
pub const SEATS_AXIS_MAX: u32 = 450;

// =============================================================================
// Splash Screen
// =============================================================================

/// Number of decorative particles floating over the splash background.
pub const SPLASH_PARTICLE_COUNT: usize = 20;

/// Spokes drawn on the Ashoka Chakra logo.
pub const CHAKRA_SPOKES: usize = 24;

/// Project repository linked from the splash, header and footer.
pub const REPOSITORY_URL: &str = "https://github.com/your-repo/indian-elections-analysis";
