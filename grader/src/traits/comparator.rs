use crate::types::{GradingInput, Verdict};

/// AnswerComparator is a strategy trait for grading answers.
/// Each implementation provides the comparison logic for one question type,
/// deciding whether the student's answer matches the reference answer.
pub trait AnswerComparator: Send + Sync {
    /// Compare the student answer of `input` against its reference answer.
    ///
    /// Implementations must never panic on malformed or missing answers:
    /// a bad student answer is [`Verdict::Incorrect`], a reference answer that
    /// cannot be checked is [`Verdict::Manual`].
    fn compare(&self, input: &GradingInput) -> Verdict;
}
