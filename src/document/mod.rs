//! `.sii` stream list handling
//!
//! This module reads a live stream list into its structural parts and
//! writes the surviving streams back inside the same envelope.

pub mod parser;
pub mod writer;

use crate::core::types::StreamRecord;

/// A parsed stream list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiiDocument {
    /// Text up to and including the `stream_data: <count>` line
    pub header: String,
    /// Well-formed entries in file order
    pub records: Vec<StreamRecord>,
    /// Closing braces of the unit
    pub footer: String,
}

// Re-export commonly used items
pub use parser::{parse_document, parse_file};
pub use writer::{render_document, write_document};
