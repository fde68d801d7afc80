//! Comparator for answers that a human has to grade.
//!
//! Used for `essay` and `canvas` questions and for any question type the engine does not know.

use crate::traits::comparator::AnswerComparator;
use crate::types::{GradingInput, Verdict};

pub struct ManualComparator;

impl AnswerComparator for ManualComparator {
    fn compare(&self, input: &GradingInput) -> Verdict {
        tracing::debug!(
            question_id = %input.question_id,
            question_type = ?input.question_type,
            "deferring to manual grading"
        );
        Verdict::Manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparators::test_helpers::{mock_input, text};
    use crate::types::QuestionType;

    #[test]
    fn test_always_manual() {
        for question_type in [QuestionType::Essay, QuestionType::Canvas, QuestionType::Unknown] {
            let answered = mock_input(question_type, None, text("an answer"), 6.0);
            assert_eq!(ManualComparator.compare(&answered), Verdict::Manual);
            let blank = mock_input(question_type, None, None, 6.0);
            assert_eq!(ManualComparator.compare(&blank), Verdict::Manual);
        }
    }
}
