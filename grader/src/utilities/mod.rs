//! # Utilities
//!
//! Helper functions shared across the `grader` crate.
//!
//! - [`text_normalization`]: Normalizes free-text answers before comparison.

pub mod text_normalization;
