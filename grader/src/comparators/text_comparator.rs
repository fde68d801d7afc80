//! A comparator for short free-text answers.
//!
//! The `TextComparator` normalizes both sides (trimmed, case-folded by default) and awards full
//! marks when the student's answer equals the reference. The reference may list several
//! acceptable answers; matching any one of them is enough.

use crate::options::TextMatching;
use crate::traits::comparator::AnswerComparator;
use crate::types::{Answer, GradingInput, Verdict};
use crate::utilities::text_normalization::normalize_text;

/// A comparator that matches normalized text against one or more accepted answers.
pub struct TextComparator {
    matching: TextMatching,
}

impl TextComparator {
    pub fn new(matching: TextMatching) -> Self {
        Self { matching }
    }

    fn accepted_answers(&self, answer: &Answer) -> Option<Vec<String>> {
        match answer {
            Answer::Text(s) => Some(vec![normalize_text(s, &self.matching)]),
            Answer::Choices(items) if !items.is_empty() => items
                .iter()
                .map(|item| match item {
                    Answer::Text(s) => Some(normalize_text(s, &self.matching)),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

impl Default for TextComparator {
    fn default() -> Self {
        Self::new(TextMatching::default())
    }
}

impl AnswerComparator for TextComparator {
    fn compare(&self, input: &GradingInput) -> Verdict {
        let Some(accepted) = input
            .correct_answer
            .as_ref()
            .and_then(|a| self.accepted_answers(a))
        else {
            tracing::warn!(
                question_id = %input.question_id,
                "short_text reference answer is missing or not text"
            );
            return Verdict::Manual;
        };

        let Some(Answer::Text(given)) = input.student_answer.as_ref() else {
            return Verdict::Incorrect;
        };
        let given = normalize_text(given, &self.matching);

        if accepted.iter().any(|a| *a == given) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}
