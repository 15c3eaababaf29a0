//! Structured logging
//!
//! Debug-level diagnostics for parsing, probing and batch progress,
//! enabled with `--verbose`.

pub mod logging;
