//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to implement pluggable feedback strategies for the grader.
//!
//! Each feedback strategy produces a list of feedback entries based on the graded answers, allowing for flexible feedback generation (e.g., automatic or instructor-written).
//!

use crate::types::GradedAnswer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub question_id: String,
    pub message: String,
}

/// A trait for pluggable feedback strategies.
///
/// # Arguments
/// - `results`: The graded answers of one attempt, in exam order.
///
/// # Returns
/// - One entry per graded answer, in the same order.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(&self, results: &[GradedAnswer]) -> Vec<FeedbackEntry>;
}
