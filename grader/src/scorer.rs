//! # Scorer Module
//!
//! This module aggregates per-question outcomes into attempt-level scores.
//! `compute_totals` produces the raw sums stored with the attempt, and
//! `compute_percentage` turns them into a whole-number percentage for display.

use crate::types::GradedAnswer;
use serde::{Deserialize, Serialize};

/// Aggregate score for an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of points awarded.
    pub total_score: f64,
    /// Sum of points possible, including questions still awaiting manual grading.
    pub max_score: f64,
    /// Whether any answer still needs a human grader.
    pub has_manual_grading: bool,
}

/// Sums awarded and possible points across graded answers.
///
/// # Example
///
/// ```
/// use grader::scorer::compute_totals;
/// use grader::types::{GradedAnswer, QuestionType};
///
/// let answers = vec![
///     GradedAnswer { question_id: "q1".into(), question_type: QuestionType::McqSingle, is_correct: Some(true), points_awarded: 4.0, points_possible: 4.0 },
///     GradedAnswer { question_id: "q2".into(), question_type: QuestionType::Essay, is_correct: None, points_awarded: 0.0, points_possible: 6.0 },
/// ];
/// let totals = compute_totals(&answers);
/// assert_eq!(totals.total_score, 4.0);
/// assert_eq!(totals.max_score, 10.0);
/// assert!(totals.has_manual_grading);
/// ```
pub fn compute_totals(answers: &[GradedAnswer]) -> Totals {
    answers.iter().fold(Totals::default(), |acc, answer| Totals {
        total_score: acc.total_score + answer.points_awarded,
        max_score: acc.max_score + answer.points_possible,
        has_manual_grading: acc.has_manual_grading || answer.requires_manual_grading(),
    })
}

/// Computes the overall score as a whole percentage between 0 and 100.
///
/// Returns 0 when `max_score` is not positive, so an empty attempt never divides by zero.
pub fn compute_percentage(totals: &Totals) -> u32 {
    if totals.max_score <= 0.0 {
        return 0;
    }
    let ratio = (totals.total_score / totals.max_score).clamp(0.0, 1.0);
    (ratio * 100.0).round() as u32
}
