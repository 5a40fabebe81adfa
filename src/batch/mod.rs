//! Batch simulation and win/loss reporting.
//!
//! Runs a fixed number of independent games per harvest policy and reports
//! victories, defeats, win rate and wall time.

pub mod config;
pub mod report;
pub mod runner;

pub use config::{BatchConfig, DEFAULT_GAMES};
pub use report::BatchReport;
pub use runner::BatchRunner;
