//! Error types for the seed-data crate.

use thiserror::Error;

/// Errors raised while parsing or checking a demonstration data set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The JSON document is malformed or misses required fields.
    #[error("invalid data set JSON: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// The document declares a version this crate does not understand.
    #[error("unsupported data set version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Version this crate reads.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },

    /// Two region seeds share the same state.
    #[error("duplicate region state '{state}'")]
    DuplicateRegion {
        /// The repeated state name.
        state: String,
    },

    /// Two project or scheme seeds share the same name.
    #[error("duplicate {collection} name '{name}'")]
    DuplicateName {
        /// Collection holding the duplicate (`projects` or `schemes`).
        collection: &'static str,
        /// The repeated name.
        name: String,
    },
}
