//! Manual feedback strategy: lets instructors attach their own message to a question.
//!
//! The instructor's message is shown whenever the student did not get the question right.
//! Correct answers, and questions with no instructor message, fall back to the automatic text.

use crate::feedback::auto_feedback::AutoFeedback;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::GradedAnswer;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ManualFeedback {
    messages: HashMap<String, String>,
}

impl ManualFeedback {
    /// Attach an instructor message to `question_id`.
    pub fn with_message(mut self, question_id: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(question_id.into(), message.into());
        self
    }
}

impl Feedback for ManualFeedback {
    fn assemble_feedback(&self, results: &[GradedAnswer]) -> Vec<FeedbackEntry> {
        let mut feedback_entries = Vec::with_capacity(results.len());

        for result in results {
            let message = match (result.is_correct, self.messages.get(&result.question_id)) {
                (Some(true), _) | (_, None) => AutoFeedback::message_for(result),
                (_, Some(custom)) => custom.clone(),
            };
            feedback_entries.push(FeedbackEntry {
                question_id: result.question_id.clone(),
                message,
            });
        }

        feedback_entries
    }
}
