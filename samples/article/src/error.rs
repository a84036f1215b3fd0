//! Errors reported by the snippet runner.

use thiserror::Error;

use crate::config::Encoding;

/// Reasons a snippet run is rejected or fails its own check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    /// The requested list is longer than the configured maximum.
    #[error("list length {length} exceeds the configured maximum of {maximum}")]
    TooLong {
        /// Requested length.
        length: usize,
        /// Configured maximum.
        maximum: usize,
    },

    /// An encoding materialized a different sequence than expected.
    #[error("{encoding} produced {actual:?}, expected {expected:?}")]
    Mismatch {
        /// The encoding that disagreed.
        encoding: Encoding,
        /// The sequence every encoding should produce.
        expected: Vec<i64>,
        /// What this encoding produced.
        actual: Vec<i64>,
    },
}
