//! Error types for the benchmark binary.
//!
//! [`BenchError`] is the top-level error type that wraps all failure
//! modes of a benchmark run so `main` can propagate them with `?`.

use std::path::PathBuf;

/// Top-level error for the benchmark binary.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The pattern file does not exist.
    #[error("pattern file '{path}' does not exist")]
    MissingPattern {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The pattern file could not be read or parsed.
    #[error("pattern error: {source}")]
    Pattern {
        /// The underlying pattern error.
        #[from]
        source: petri_core::PatternError,
    },
}
