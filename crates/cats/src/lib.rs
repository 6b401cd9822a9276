#![warn(missing_docs)]
//! Procedural cat appearance generation.
//!
//! The [`taxonomy`] module holds the closed trait tables, [`genetics`] runs
//! the seeded pipeline that turns a [`genetics::Genotype`] into a
//! [`looks::Looks`], and [`cat`] wraps the result in a cat with an identity
//! and a life stage. All randomness flows through `clowder_core::SeededRng`,
//! so the same seed always yields the same cat.

pub mod cat;
pub mod config;
pub mod genetics;
pub mod looks;
pub mod taxonomy;

// Re-export commonly used types
pub use cat::{AgeStage, Cat, Sex};
pub use config::{GenerationConfig, TintConfig};
pub use genetics::{generate, Genotype};
pub use looks::{Looks, SpriteSet};
