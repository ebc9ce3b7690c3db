//! # Mandate Core
//!
//! Platform-independent library behind the Mandate election dashboard.
//!
//! This crate owns everything that is not markup: the page-level state
//! machines, the hard-coded election datasets, the close-contest filter, the
//! turnout generator and the Plotly figure builders. The `mandate` crate
//! composes these into Dioxus components.
//!
//! ## Modules
//!
//! - [`shell`] - Splash/main one-shot visibility state
//! - [`tabs`] - Visualization tab identifiers and selector
//! - [`dataset`] - Immutable mock election records
//! - [`party`] - Party code to colour mapping
//! - [`contests`] - Margin thresholds, filtering and summary counts
//! - [`turnout`] - State list and randomised turnout matrices
//! - [`history`] - Seat-series trajectories and insight lines
//! - [`loading`] - One-shot mock loading state
//! - [`chart`] - Serde-serialisable Plotly figures
//! - [`config`] - Compile-time constants
//! - [`error`] - Error types
//! - [`formatting`] - Display helpers

#![forbid(unsafe_code)]

pub mod chart;
pub mod config;
pub mod contests;
pub mod dataset;
pub mod error;
pub mod formatting;
pub mod history;
pub mod loading;
pub mod party;
pub mod shell;
pub mod tabs;
pub mod turnout;

pub use error::MandateError;
