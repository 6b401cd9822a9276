#![warn(missing_docs)]
//! Deterministic randomness primitives shared across the workspace.
//!
//! Everything that decides a cat's appearance routes through the seeded
//! engine in [`rng`]; [`sample`] adds a precomputed O(1) weighted table for
//! distributions that are drawn from repeatedly.

pub mod error;
pub mod rng;
pub mod sample;

// Re-export commonly used types
pub use error::{Error, Result};
pub use rng::SeededRng;
pub use sample::WeightedTable;
