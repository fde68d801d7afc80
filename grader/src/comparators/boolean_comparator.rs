//! Comparator for `true_false` questions.

use crate::traits::comparator::AnswerComparator;
use crate::types::{Answer, GradingInput, Verdict};

pub struct BooleanComparator;

impl AnswerComparator for BooleanComparator {
    fn compare(&self, input: &GradingInput) -> Verdict {
        let Some(Answer::Bool(expected)) = input.correct_answer else {
            tracing::warn!(
                question_id = %input.question_id,
                "true_false reference answer is missing or not a boolean"
            );
            return Verdict::Manual;
        };

        match input.student_answer {
            Some(Answer::Bool(given)) if given == expected => Verdict::Correct,
            _ => Verdict::Incorrect,
        }
    }
}
