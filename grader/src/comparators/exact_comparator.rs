//! A comparator that performs an exact match on a single option identifier.
//!
//! The `ExactComparator` awards marks on an all-or-nothing basis: the student's selected option
//! must be the reference option. Used for `mcq_single` questions.

use crate::traits::comparator::AnswerComparator;
use crate::types::{GradingInput, Verdict};

/// A comparator that marks an answer correct only if the selected option equals the reference option.
///
/// Options are compared as identifiers, so an integer `2` and the string `"2"` are the same option.
/// A missing or non-scalar student answer is incorrect.
pub struct ExactComparator;

impl AnswerComparator for ExactComparator {
    fn compare(&self, input: &GradingInput) -> Verdict {
        let Some(expected) = input.correct_answer.as_ref().and_then(|a| a.as_option_id()) else {
            tracing::warn!(
                question_id = %input.question_id,
                "mcq_single reference answer is missing or not an option id"
            );
            return Verdict::Manual;
        };

        match input.student_answer.as_ref().and_then(|a| a.as_option_id()) {
            Some(given) if given == expected => Verdict::Correct,
            _ => Verdict::Incorrect,
        }
    }
}
