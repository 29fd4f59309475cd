//! Built-in sample dataset.
//!
//! The same document ships as `sample-data.json` at the repository root,
//! which is also the default load location.

use super::document::{parse_str, ParseResult};
use super::types::Dataset;

/// Raw JSON of the bundled sample document.
pub const SAMPLE_JSON: &str = include_str!("../../sample-data.json");

/// Parses the bundled sample document.
pub fn sample_dataset() -> ParseResult<Dataset> {
    parse_str(SAMPLE_JSON)
}
