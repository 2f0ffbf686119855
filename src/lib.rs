//! `taylor-sim` library crate.
//!
//! The binary (`taylor`) is a thin wrapper around this library so that:
//!
//! - the rule engine is testable without spawning processes
//! - the CLI and the TUI share one simulation pipeline

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod rule;
pub mod tui;
