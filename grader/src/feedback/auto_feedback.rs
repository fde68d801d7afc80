//! # AutoFeedback Strategy
//!
//! This module provides the `AutoFeedback` strategy for the grader.
//! It implements the [`Feedback`] trait to generate template-based feedback for each graded answer.
//!
//! ## Overview
//!
//! - Correct answers report the points earned.
//! - Incorrect answers report that no points were awarded.
//! - Answers awaiting a human grader say so.

use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::GradedAnswer;

/// Automatic feedback strategy: generates template-based feedback for each answer.
#[derive(Debug, Default)]
pub struct AutoFeedback;

impl AutoFeedback {
    pub(crate) fn message_for(answer: &GradedAnswer) -> String {
        match answer.is_correct {
            Some(true) => format!(
                "Correct ({}/{} points)",
                answer.points_awarded, answer.points_possible
            ),
            Some(false) => format!("Incorrect (0/{} points)", answer.points_possible),
            None => "Awaiting manual grading".to_string(),
        }
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(&self, results: &[GradedAnswer]) -> Vec<FeedbackEntry> {
        results
            .iter()
            .map(|answer| FeedbackEntry {
                question_id: answer.question_id.clone(),
                message: Self::message_for(answer),
            })
            .collect()
    }
}
