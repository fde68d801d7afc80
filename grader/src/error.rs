//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum. Student data never produces an error:
//! missing or malformed answers are graded as incorrect. These variants describe violations
//! of the input contract that the caller is expected to prevent.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//!
//! fn check_points(points: f64) -> Result<(), GraderError> {
//!     if points <= 0.0 {
//!         return Err(GraderError::InvalidPoints { question_id: "q1".into(), points });
//!     }
//!     Ok(())
//! }
//! ```

/// Represents all error types that can occur in the grader.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraderError {
    /// The request contained no questions.
    #[error("grading request contains no questions")]
    EmptyRequest,
    /// Two inputs share a question id.
    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),
    /// A question id is empty or whitespace.
    #[error("question at position {0} has an empty id")]
    InvalidQuestionId(usize),
    /// Points must be finite and strictly positive.
    #[error("question {question_id} has invalid points value {points}")]
    InvalidPoints { question_id: String, points: f64 },
    /// Tolerance must be finite and non-negative.
    #[error("question {question_id} has invalid numeric tolerance {tolerance}")]
    InvalidTolerance { question_id: String, tolerance: f64 },
}
