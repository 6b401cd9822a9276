//! Error taxonomy for the sampling primitives.
//!
//! Every variant here is a programmer or data-authoring error, not an
//! expected runtime condition. Callers propagate them immediately so that
//! malformed weight tables surface at the content-loading layer instead of
//! being silently defaulted.

use thiserror::Error;

/// Errors produced by [`crate::rng::SeededRng`] and
/// [`crate::sample::WeightedTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A draw was attempted over a zero-length candidate set.
    #[error("draw attempted over an empty candidate set")]
    EmptyInput,

    /// Parallel arrays disagree, a weight vector sums to zero, or a
    /// population argument is invalid.
    #[error("invalid sampling configuration: {0}")]
    Configuration(String),

    /// An explicit index request exceeded the bounds of a sized table.
    #[error("index {index} out of range for table of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The table length.
        len: usize,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
