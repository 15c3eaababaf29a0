//! streamsup - prune unreachable radio streams from a `.sii` live stream list
//!
//! The crate parses a `live_streams.sii` file, probes every stream URL with a
//! HEAD request (falling back to a ranged GET when the HEAD fails or is refused),
//! and rewrites the file with only the reachable streams, renumbered and with
//! a corrected `stream_data` count.
//!
//! ## Module Organization
//!
//! - [`core`] - Stream record type, errors, constants
//! - [`document`] - `.sii` parsing and writing
//! - [`validation`] - Reachability checks and the concurrent batch runner
//! - [`config`] - TOML and CLI configuration
//! - [`ui`] - CLI definition, console output, progress reporting
//! - [`reporting`] - Logging

pub mod config;
pub mod core;
pub mod document;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use config::{CliConfig, Config};
pub use crate::core::{Result, StreamRecord, StreamsUpError};
pub use document::{SiiDocument, parse_document, parse_file, render_document, write_document};
pub use validation::{BatchReport, CheckOutcome, CheckStream, HttpChecker, run_batch};
