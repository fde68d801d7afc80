//! A comparator for multi-select questions where **order does not matter**.
//!
//! The `SetComparator` treats both the reference and the student selection as sets.
//! Full marks are awarded only when the sets are identical; there is no partial credit.

use crate::traits::comparator::AnswerComparator;
use crate::types::{Answer, GradingInput, Verdict};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// A comparator that awards full marks iff the selected options equal the reference options.
///
/// Duplicate selections are ignored. Options may be strings or integers (`2` is `"2"`).
/// A single string where a list is expected is a mismatch.
pub struct SetComparator;

fn as_option_set(answer: &Answer) -> Option<BTreeSet<Cow<'_, str>>> {
    answer.as_option_ids().map(|ids| ids.into_iter().collect())
}

impl AnswerComparator for SetComparator {
    fn compare(&self, input: &GradingInput) -> Verdict {
        let Some(expected) = input.correct_answer.as_ref().and_then(as_option_set) else {
            tracing::warn!(
                question_id = %input.question_id,
                "mcq_multi reference answer is missing or not a list of options"
            );
            return Verdict::Manual;
        };

        match input.student_answer.as_ref().and_then(as_option_set) {
            Some(given) if given == expected => Verdict::Correct,
            _ => Verdict::Incorrect,
        }
    }
}
