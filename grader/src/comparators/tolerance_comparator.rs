//! A comparator for numeric answers with an absolute tolerance.
//!
//! The `ToleranceComparator` marks an answer correct when `|student - correct| <= tolerance`.
//! The tolerance comes from the question and defaults to `0`, i.e. an exact match.

use crate::traits::comparator::AnswerComparator;
use crate::types::{GradingInput, Verdict};

/// A comparator that accepts numeric answers within the question's tolerance.
///
/// Numbers given as strings (e.g. from a text field) are parsed after trimming. Anything that is
/// not a finite number is incorrect.
pub struct ToleranceComparator;

impl AnswerComparator for ToleranceComparator {
    fn compare(&self, input: &GradingInput) -> Verdict {
        let Some(expected) = input.correct_answer.as_ref().and_then(|a| a.as_number()) else {
            tracing::warn!(
                question_id = %input.question_id,
                "numeric reference answer is missing or not a number"
            );
            return Verdict::Manual;
        };

        let tolerance = input
            .numeric_tolerance
            .filter(|t| t.is_finite())
            .map(f64::abs)
            .unwrap_or(0.0);

        match input.student_answer.as_ref().and_then(|a| a.as_number()) {
            Some(given) if (given - expected).abs() <= tolerance => Verdict::Correct,
            _ => Verdict::Incorrect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparators::test_helpers::{choices, mock_input, text};
    use crate::types::{Answer, QuestionType};

    fn grade(correct: f64, tolerance: Option<f64>, student: Option<Answer>) -> Verdict {
        let mut input = mock_input(QuestionType::Numeric, Some(Answer::Number(correct)), student, 2.0);
        input.numeric_tolerance = tolerance;
        ToleranceComparator.compare(&input)
    }

    #[test]
    fn test_within_tolerance() {
        assert_eq!(grade(10.0, Some(0.5), Some(Answer::Number(10.4))), Verdict::Correct);
        assert_eq!(grade(10.0, Some(0.5), Some(Answer::Number(9.6))), Verdict::Correct);
    }

    #[test]
    fn test_outside_tolerance() {
        assert_eq!(grade(10.0, Some(0.5), Some(Answer::Number(10.6))), Verdict::Incorrect);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert_eq!(grade(10.0, Some(0.5), Some(Answer::Number(10.5))), Verdict::Correct);
    }

    #[test]
    fn test_default_tolerance_is_exact() {
        assert_eq!(grade(3.0, None, Some(Answer::Number(3.0))), Verdict::Correct);
        assert_eq!(grade(3.0, None, Some(Answer::Number(3.001))), Verdict::Incorrect);
    }

    #[test]
    fn test_numeric_string_is_parsed() {
        assert_eq!(grade(10.0, Some(0.5), text(" 10.2 ")), Verdict::Correct);
    }

    #[test]
    fn test_non_numeric_answer() {
        assert_eq!(grade(10.0, Some(0.5), text("ten")), Verdict::Incorrect);
        assert_eq!(grade(10.0, Some(0.5), choices(&["10"])), Verdict::Incorrect);
        assert_eq!(grade(10.0, Some(0.5), Some(Answer::Bool(true))), Verdict::Incorrect);
    }

    #[test]
    fn test_unanswered() {
        assert_eq!(grade(10.0, Some(100.0), None), Verdict::Incorrect);
    }

    #[test]
    fn test_malformed_reference() {
        let input = mock_input(QuestionType::Numeric, text("abc"), Some(Answer::Number(1.0)), 2.0);
        assert_eq!(ToleranceComparator.compare(&input), Verdict::Manual);
    }
}
