//! # Grade Report Module
//!
//! This module defines the data structures and response envelope for returning grading results.
//! It provides a standardized, serializable format for reporting per-question results, totals,
//! the attempt status and feedback to callers.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Grading complete.",
//!   "data": {
//!     "status": "pending_review",
//!     "percentage": 40,
//!     "result": {
//!       "graded_answers": [
//!         { "question_id": "q1", "question_type": "mcq_single", "is_correct": true, "points_awarded": 4.0, "points_possible": 4.0 },
//!         { "question_id": "q2", "question_type": "essay", "is_correct": null, "points_awarded": 0.0, "points_possible": 6.0 }
//!       ],
//!       "total_score": 4.0,
//!       "max_score": 10.0,
//!       "has_manual_grading": true
//!     },
//!     "feedback": [
//!       { "question_id": "q1", "message": "Correct (4/4 points)" },
//!       { "question_id": "q2", "message": "Awaiting manual grading" }
//!     ]
//!   }
//! }
//! ```

use crate::traits::feedback::FeedbackEntry;
use crate::types::GradingResult;
use serde::{Deserialize, Serialize};

/// Where an attempt stands once automatic grading has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// Every question was graded automatically.
    Graded,
    /// At least one question waits for a human grader.
    PendingReview,
}

impl From<&GradingResult> for AttemptStatus {
    fn from(result: &GradingResult) -> Self {
        if result.has_manual_grading {
            AttemptStatus::PendingReview
        } else {
            AttemptStatus::Graded
        }
    }
}

/// The final report for one graded attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub status: AttemptStatus,
    /// Overall score as a whole percentage (0-100).
    pub percentage: u32,
    pub result: GradingResult,
    pub feedback: Vec<FeedbackEntry>,
}

/// The response envelope for grading results.
///
/// - `success`: Always true for successful grading.
/// - `message`: A human-readable message.
/// - `data`: The [`GradeReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReportResponse {
    pub success: bool,
    pub message: String,
    pub data: GradeReport,
}

impl From<GradeReport> for GradeReportResponse {
    fn from(report: GradeReport) -> Self {
        let message = match report.status {
            AttemptStatus::Graded => "Grading complete.",
            AttemptStatus::PendingReview => "Grading complete. Some answers await manual review.",
        };
        GradeReportResponse {
            success: true,
            message: message.to_string(),
            data: report,
        }
    }
}
