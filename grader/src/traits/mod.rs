//!
//! Traits Module
//!
//! This module contains the core traits used throughout the grader for extensibility.
//!
//! - [`comparator`]: Defines the per-question-type comparison strategy.
//! - [`feedback`]: Defines pluggable feedback strategies.

pub mod comparator;
pub mod feedback;
