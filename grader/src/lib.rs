//! # Grader Library
//!
//! This crate provides the exam grading engine. Given one input per exam question (type,
//! reference answer, submitted answer, points) it decides which answers are correct, awards
//! points and aggregates the attempt score.
//!
//! ## Key Concepts
//! - **grade_attempt**: The pure grading function. Never fails on student data.
//! - **GradingJob**: A builder that validates the request, grades it and assembles a report with feedback.
//! - **Comparators**: Per-question-type comparison strategies (exact, set, boolean, tolerance, text, manual).
//! - **Feedback**: Pluggable feedback generation for each graded answer.

pub mod comparators;
pub mod error;
pub mod feedback;
pub mod options;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;
pub mod validation;

use crate::comparators::ComparatorSet;
use crate::error::GraderError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::options::GradingOptions;
use crate::report::{AttemptStatus, GradeReport};
use crate::traits::comparator::AnswerComparator;
use crate::traits::feedback::Feedback;
use crate::types::{GradedAnswer, GradingRequest, GradingResult, QuestionType};

/// Grades an attempt with the default comparators.
///
/// This is a total function: missing, malformed or unexpected-shape answers are graded as
/// incorrect, and questions that cannot be checked automatically are left for manual grading.
///
/// # Example
///
/// ```
/// use grader::grade_attempt;
/// use grader::types::{Answer, GradingInput, GradingRequest, QuestionType};
///
/// let request = GradingRequest {
///     answers: vec![GradingInput {
///         question_id: "q1".into(),
///         question_type: QuestionType::McqSingle,
///         correct_answer: Some(Answer::Text("B".into())),
///         student_answer: Some(Answer::Text("B".into())),
///         points: 4.0,
///         numeric_tolerance: None,
///     }],
/// };
/// let result = grade_attempt(&request);
/// assert_eq!(result.total_score, 4.0);
/// assert_eq!(result.graded_answers[0].is_correct, Some(true));
/// ```
pub fn grade_attempt(request: &GradingRequest) -> GradingResult {
    grade_with(&ComparatorSet::default(), request)
}

/// Grades an attempt using the given comparators.
pub fn grade_with(comparators: &ComparatorSet, request: &GradingRequest) -> GradingResult {
    let graded_answers: Vec<GradedAnswer> = request
        .answers
        .iter()
        .map(|input| {
            let verdict = comparators.comparator_for(input.question_type).compare(input);
            tracing::debug!(
                question_id = %input.question_id,
                question_type = ?input.question_type,
                ?verdict,
                "graded answer"
            );
            GradedAnswer::from_verdict(input, verdict)
        })
        .collect();

    let totals = scorer::compute_totals(&graded_answers);

    GradingResult {
        graded_answers,
        total_score: totals.total_score,
        max_score: totals.max_score,
        has_manual_grading: totals.has_manual_grading,
    }
}

/// Represents a grading job for a single attempt.
///
/// # Fields
/// - `request`: The questions and answers to grade.
/// - `options`: Matching rules handed to the built-in comparators.
/// - `overrides`: Custom comparators replacing the built-in one for a question type.
/// - `feedback`: Feedback strategy applied to the graded answers.
pub struct GradingJob {
    request: GradingRequest,
    options: GradingOptions,
    overrides: Vec<(QuestionType, Box<dyn AnswerComparator>)>,
    feedback: Box<dyn Feedback>,
}

impl GradingJob {
    /// Create a new grading job with default options and automatic feedback.
    pub fn new(request: GradingRequest) -> Self {
        Self {
            request,
            options: GradingOptions::default(),
            overrides: Vec::new(),
            feedback: Box::new(AutoFeedback),
        }
    }

    /// Set the grading options (e.g. short-text matching rules).
    pub fn with_options(mut self, options: GradingOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the comparator used for one question type.
    pub fn with_comparator<C: AnswerComparator + 'static>(
        mut self,
        question_type: QuestionType,
        comparator: C,
    ) -> Self {
        self.overrides.push((question_type, Box::new(comparator)));
        self
    }

    /// Set a custom feedback strategy for this job.
    pub fn with_feedback<F: Feedback + 'static>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the grading process and generate a report.
    ///
    /// # Steps
    /// 1. Validates the request against the input contract.
    /// 2. Grades every answer with the configured comparators.
    /// 3. Generates feedback for the graded answers.
    /// 4. Builds the report with totals, percentage and attempt status.
    ///
    /// # Errors
    /// Returns a [`GraderError`] if the request violates the input contract.
    pub fn grade(self) -> Result<GradeReport, GraderError> {
        validation::validate_inputs(&self.request.answers)?;

        let mut comparators = ComparatorSet::new(&self.options);
        for (question_type, comparator) in self.overrides {
            comparators.set_override(question_type, comparator);
        }

        let result = grade_with(&comparators, &self.request);
        let feedback = self.feedback.assemble_feedback(&result.graded_answers);
        let percentage = scorer::compute_percentage(&scorer::Totals {
            total_score: result.total_score,
            max_score: result.max_score,
            has_manual_grading: result.has_manual_grading,
        });

        tracing::info!(
            questions = result.graded_answers.len(),
            total_score = result.total_score,
            max_score = result.max_score,
            has_manual_grading = result.has_manual_grading,
            "graded attempt"
        );

        Ok(GradeReport {
            status: AttemptStatus::from(&result),
            percentage,
            result,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::manual_feedback::ManualFeedback;
    use crate::options::TextMatching;
    use crate::types::{Answer, GradingInput, Verdict};

    fn input(id: &str, question_type: QuestionType, correct: Option<Answer>, student: Option<Answer>, points: f64) -> GradingInput {
        GradingInput {
            question_id: id.to_string(),
            question_type,
            correct_answer: correct,
            student_answer: student,
            points,
            numeric_tolerance: None,
        }
    }

    fn text(s: &str) -> Option<Answer> {
        Some(Answer::Text(s.to_string()))
    }

    fn mixed_request() -> GradingRequest {
        GradingRequest {
            answers: vec![
                input("q1", QuestionType::McqSingle, text("B"), text("B"), 4.0),
                input("q2", QuestionType::Essay, None, text("My essay"), 6.0),
            ],
        }
    }

    #[test]
    fn test_mixed_exam_end_to_end() {
        let result = grade_attempt(&mixed_request());
        assert_eq!(result.total_score, 4.0);
        assert_eq!(result.max_score, 10.0);
        assert!(result.has_manual_grading);
        assert_eq!(result.graded_answers[0].is_correct, Some(true));
        assert_eq!(result.graded_answers[1].is_correct, None);
        assert_eq!(result.graded_answers[1].points_awarded, 0.0);
    }

    #[test]
    fn test_grading_is_deterministic() {
        let request = mixed_request();
        assert_eq!(grade_attempt(&request), grade_attempt(&request));
    }

    #[test]
    fn test_order_and_cardinality_preserved() {
        let request = GradingRequest {
            answers: vec![
                input("z", QuestionType::TrueFalse, Some(Answer::Bool(true)), None, 1.0),
                input("a", QuestionType::ShortText, text("x"), text("x"), 1.0),
                input("m", QuestionType::Canvas, None, None, 1.0),
            ],
        };
        let ids: Vec<_> = grade_attempt(&request)
            .graded_answers
            .into_iter()
            .map(|a| a.question_id)
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_job_report() {
        let report = GradingJob::new(mixed_request()).grade().unwrap();
        assert_eq!(report.status, AttemptStatus::PendingReview);
        assert_eq!(report.percentage, 40);
        assert_eq!(report.feedback.len(), 2);
        assert_eq!(report.feedback[1].message, "Awaiting manual grading");
    }

    #[test]
    fn test_job_rejects_contract_violation() {
        let request = GradingRequest {
            answers: vec![
                input("q1", QuestionType::McqSingle, text("B"), text("B"), 4.0),
                input("q1", QuestionType::McqSingle, text("C"), text("C"), 4.0),
            ],
        };
        assert_eq!(
            GradingJob::new(request).grade(),
            Err(GraderError::DuplicateQuestionId("q1".to_string()))
        );
        assert_eq!(
            GradingJob::new(GradingRequest::default()).grade(),
            Err(GraderError::EmptyRequest)
        );
    }

    #[test]
    fn test_job_options_and_feedback() {
        let request = GradingRequest {
            answers: vec![input("q1", QuestionType::ShortText, text("Paris"), text("paris"), 2.0)],
        };
        let report = GradingJob::new(request)
            .with_options(GradingOptions {
                text_matching: TextMatching {
                    case_sensitive: true,
                    collapse_whitespace: false,
                },
            })
            .with_feedback(ManualFeedback::default().with_message("q1", "Capitalise proper nouns"))
            .grade()
            .unwrap();
        assert_eq!(report.status, AttemptStatus::Graded);
        assert_eq!(report.result.total_score, 0.0);
        assert_eq!(report.feedback[0].message, "Capitalise proper nouns");
    }

    struct NeverCorrect;

    impl AnswerComparator for NeverCorrect {
        fn compare(&self, _input: &GradingInput) -> Verdict {
            Verdict::Incorrect
        }
    }

    #[test]
    fn test_job_comparator_override() {
        let report = GradingJob::new(mixed_request())
            .with_comparator(QuestionType::McqSingle, NeverCorrect)
            .grade()
            .unwrap();
        assert_eq!(report.result.total_score, 0.0);
        assert_eq!(report.result.graded_answers[0].is_correct, Some(false));
    }
}
