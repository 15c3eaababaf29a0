//! Stream reachability checks
//!
//! This module probes stream URLs over HTTP and runs those probes
//! concurrently over a whole stream list.

pub mod checker;
pub mod runner;

// Re-export commonly used items
pub use checker::{CheckStream, HttpChecker};
pub use runner::{BatchReport, CheckOutcome, run_batch};
