//! Input-contract checks.
//!
//! The engine itself never fails on student data. These checks cover mistakes the caller
//! makes while assembling a request, and are run by [`crate::GradingJob::grade`].

use crate::error::GraderError;
use crate::types::GradingInput;
use std::collections::HashSet;

/// Validates that a request is well formed before grading.
///
/// # Errors
///
/// - [`GraderError::EmptyRequest`] if there are no inputs.
/// - [`GraderError::InvalidQuestionId`] if an id is blank.
/// - [`GraderError::DuplicateQuestionId`] if two inputs share an id.
/// - [`GraderError::InvalidPoints`] if points are not finite or not strictly positive.
/// - [`GraderError::InvalidTolerance`] if a tolerance is negative or not finite.
pub fn validate_inputs(inputs: &[GradingInput]) -> Result<(), GraderError> {
    if inputs.is_empty() {
        return Err(GraderError::EmptyRequest);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(inputs.len());
    for (position, input) in inputs.iter().enumerate() {
        if input.question_id.trim().is_empty() {
            return Err(GraderError::InvalidQuestionId(position));
        }
        if !seen.insert(input.question_id.as_str()) {
            return Err(GraderError::DuplicateQuestionId(input.question_id.clone()));
        }
        if !input.points.is_finite() || input.points <= 0.0 {
            return Err(GraderError::InvalidPoints {
                question_id: input.question_id.clone(),
                points: input.points,
            });
        }
        if let Some(tolerance) = input.numeric_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(GraderError::InvalidTolerance {
                    question_id: input.question_id.clone(),
                    tolerance,
                });
            }
        }
    }
    Ok(())
}
