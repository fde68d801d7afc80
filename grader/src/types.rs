//! # Types Module
//!
//! This module defines the core data structures used throughout the grading engine.
//! Inputs describe one exam question each (type, reference answer, submitted answer, points),
//! and results describe how each question was graded and how the attempt scored overall.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The closed set of question types understood by the engine.
///
/// Any tag the engine does not recognise deserializes to [`QuestionType::Unknown`]
/// and is routed to manual grading instead of failing the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    McqSingle,
    McqMulti,
    TrueFalse,
    Numeric,
    ShortText,
    Essay,
    /// Drawing answers captured by the exam form. Graded by a human.
    Canvas,
    #[serde(other)]
    Unknown,
}

/// An answer payload, either the reference answer or the one a student submitted.
///
/// Decoded untagged, so the JSON shape picks the variant. Anything that fits none of
/// the expected shapes lands in [`Answer::Other`]; comparators treat it as a mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Number(f64),
    Text(String),
    /// A list of answers, e.g. the options picked in a multi-select question.
    Choices(Vec<Answer>),
    Other(serde_json::Value),
}

impl Answer {
    /// Interprets the answer as a single option identifier.
    ///
    /// Integer-valued numbers are accepted so that `2` and `"2"` name the same option.
    /// The number is written out in full, so distinct values always give distinct ids.
    pub fn as_option_id(&self) -> Option<Cow<'_, str>> {
        match self {
            Answer::Text(s) => Some(Cow::Borrowed(s.as_str())),
            // `+ 0.0` turns -0 into 0
            Answer::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                Some(Cow::Owned(format!("{}", *n + 0.0)))
            }
            _ => None,
        }
    }

    /// Interprets the answer as a list of option identifiers.
    ///
    /// Every element must itself be an option id; one bad element rejects the whole list.
    pub fn as_option_ids(&self) -> Option<Vec<Cow<'_, str>>> {
        match self {
            Answer::Choices(items) => items.iter().map(Answer::as_option_id).collect(),
            _ => None,
        }
    }

    /// Interprets the answer as a finite number. Numeric strings are parsed after trimming.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Answer::Number(n) => *n,
            Answer::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// One question of an attempt, as assembled by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingInput {
    pub question_id: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub correct_answer: Option<Answer>,
    #[serde(default)]
    pub student_answer: Option<Answer>,
    /// Maximum points obtainable for this question.
    pub points: f64,
    /// Absolute deviation allowed for `numeric` questions.
    #[serde(default)]
    pub numeric_tolerance: Option<f64>,
}

/// The full set of questions for one attempt, in exam order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradingRequest {
    pub answers: Vec<GradingInput>,
}

/// The outcome of comparing one answer against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// Correctness cannot be decided automatically; a human grader must score it.
    Manual,
}

/// Represents the grading outcome for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub question_id: String,
    pub question_type: QuestionType,
    /// `None` when the question awaits manual grading.
    pub is_correct: Option<bool>,
    pub points_awarded: f64,
    pub points_possible: f64,
}

impl GradedAnswer {
    /// Builds a graded answer from a verdict. Points are all-or-nothing.
    pub fn from_verdict(input: &GradingInput, verdict: Verdict) -> Self {
        let (is_correct, points_awarded) = match verdict {
            Verdict::Correct => (Some(true), input.points),
            Verdict::Incorrect => (Some(false), 0.0),
            Verdict::Manual => (None, 0.0),
        };
        Self {
            question_id: input.question_id.clone(),
            question_type: input.question_type,
            is_correct,
            points_awarded,
            points_possible: input.points,
        }
    }

    pub fn requires_manual_grading(&self) -> bool {
        self.is_correct.is_none()
    }
}

/// The graded attempt: per-question results plus aggregate scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub graded_answers: Vec<GradedAnswer>,
    pub total_score: f64,
    pub max_score: f64,
    pub has_manual_grading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_question_type_deserializes() {
        let t: QuestionType = serde_json::from_value(json!("drag_and_drop")).unwrap();
        assert_eq!(t, QuestionType::Unknown);
        let t: QuestionType = serde_json::from_value(json!("canvas")).unwrap();
        assert_eq!(t, QuestionType::Canvas);
    }

    #[test]
    fn test_answer_shapes() {
        let a: Answer = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(a, Answer::Bool(true));
        let a: Answer = serde_json::from_value(json!(10.5)).unwrap();
        assert_eq!(a, Answer::Number(10.5));
        let a: Answer = serde_json::from_value(json!("B")).unwrap();
        assert_eq!(a, Answer::Text("B".to_string()));
        let a: Answer = serde_json::from_value(json!(["A", "C"])).unwrap();
        assert_eq!(
            a,
            Answer::Choices(vec![Answer::Text("A".to_string()), Answer::Text("C".to_string())])
        );
        let a: Answer = serde_json::from_value(json!([1, 3])).unwrap();
        assert_eq!(a, Answer::Choices(vec![Answer::Number(1.0), Answer::Number(3.0)]));
        let a: Answer = serde_json::from_value(json!({"x": 1})).unwrap();
        assert!(matches!(a, Answer::Other(_)));
    }

    #[test]
    fn test_null_student_answer_is_none() {
        let input: GradingInput = serde_json::from_value(json!({
            "question_id": "q1",
            "question_type": "mcq_single",
            "correct_answer": "B",
            "student_answer": null,
            "points": 4
        }))
        .unwrap();
        assert_eq!(input.student_answer, None);
        assert_eq!(input.numeric_tolerance, None);
    }

    #[test]
    fn test_option_id_and_number_views() {
        assert_eq!(Answer::Number(2.0).as_option_id().as_deref(), Some("2"));
        assert_eq!(Answer::Number(2.5).as_option_id(), None);
        assert_eq!(Answer::Number(-3.0).as_option_id().as_deref(), Some("-3"));
        assert_eq!(Answer::Text(" 10.4 ".into()).as_number(), Some(10.4));
        assert_eq!(Answer::Text("ten".into()).as_number(), None);
        assert_eq!(Answer::Number(f64::NAN).as_number(), None);
        assert_eq!(Answer::Bool(true).as_number(), None);
    }

    #[test]
    fn test_large_numbers_keep_distinct_option_ids() {
        assert_eq!(
            Answer::Number(1e19).as_option_id().as_deref(),
            Some("10000000000000000000")
        );
        assert_eq!(
            Answer::Number(1e20).as_option_id().as_deref(),
            Some("100000000000000000000")
        );
        assert_eq!(Answer::Number(-0.0).as_option_id().as_deref(), Some("0"));
        assert_eq!(Answer::Number(f64::INFINITY).as_option_id(), None);
    }

    #[test]
    fn test_option_id_lists() {
        let mixed = Answer::Choices(vec![Answer::Text("A".into()), Answer::Number(2.0)]);
        let ids: Vec<String> = mixed
            .as_option_ids()
            .unwrap()
            .into_iter()
            .map(|c| c.into_owned())
            .collect();
        assert_eq!(ids, vec!["A", "2"]);

        let bad = Answer::Choices(vec![Answer::Text("A".into()), Answer::Bool(true)]);
        assert_eq!(bad.as_option_ids(), None);
        assert_eq!(Answer::Text("A".into()).as_option_ids(), None);
    }
}
