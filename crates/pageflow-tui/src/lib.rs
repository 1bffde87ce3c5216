//! # pageflow-tui - Terminal UI for pageflow
//!
//! This crate provides the ratatui-based rendering surface. It maps
//! crossterm events into [`pageflow_app::Message`]s, draws the active
//! section from the derived UI state, and runs the event loop that
//! schedules transition timers.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;

// Re-export main entry point
pub use runner::run;
