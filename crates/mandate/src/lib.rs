//! Mandate - Indian election statistics dashboard.
//!
//! A single-page site that opens on a splash screen and then presents a
//! tabbed browser of election charts. All data is hard-coded; state and chart
//! construction live in `mandate-core`, and this crate turns them into
//! Dioxus components.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: `dx serve --features web`
//! - **Desktop**: `dx serve --features desktop`
//!
//! Charts are drawn by Plotly.js, loaded from a CDN and driven through
//! `document::eval`.

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
