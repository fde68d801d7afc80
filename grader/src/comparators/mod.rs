//! # Comparators
//!
//! This module provides the comparators used to grade submitted answers.
//! Each comparator implements the comparison rule for one family of question types
//! and adheres to the [`AnswerComparator`] trait, so strategies can be swapped per type.
//!
//! The available comparators are:
//! - [`exact_comparator`]: single option identifiers must match exactly (`mcq_single`).
//! - [`set_comparator`]: option sets must match exactly, ignoring order and duplicates (`mcq_multi`).
//! - [`boolean_comparator`]: booleans must match (`true_false`).
//! - [`tolerance_comparator`]: numbers must fall within an absolute tolerance (`numeric`).
//! - [`text_comparator`]: normalized text must match any accepted answer (`short_text`).
//! - [`manual_comparator`]: defers to a human grader (`essay`, `canvas`, unknown types).

pub mod boolean_comparator;
pub mod exact_comparator;
pub mod manual_comparator;
pub mod set_comparator;
pub mod text_comparator;
pub mod tolerance_comparator;

use crate::options::GradingOptions;
use crate::traits::comparator::AnswerComparator;
use crate::types::QuestionType;
use std::collections::HashMap;

use boolean_comparator::BooleanComparator;
use exact_comparator::ExactComparator;
use manual_comparator::ManualComparator;
use set_comparator::SetComparator;
use text_comparator::TextComparator;
use tolerance_comparator::ToleranceComparator;

/// Maps every question type to the comparator that grades it.
///
/// Built-in comparators are used unless an override was registered for the type.
pub struct ComparatorSet {
    exact: ExactComparator,
    set: SetComparator,
    boolean: BooleanComparator,
    tolerance: ToleranceComparator,
    text: TextComparator,
    manual: ManualComparator,
    overrides: HashMap<QuestionType, Box<dyn AnswerComparator>>,
}

impl ComparatorSet {
    pub fn new(options: &GradingOptions) -> Self {
        Self {
            exact: ExactComparator,
            set: SetComparator,
            boolean: BooleanComparator,
            tolerance: ToleranceComparator,
            text: TextComparator::new(options.text_matching),
            manual: ManualComparator,
            overrides: HashMap::new(),
        }
    }

    /// Replace the comparator used for `question_type`.
    pub fn set_override(&mut self, question_type: QuestionType, comparator: Box<dyn AnswerComparator>) {
        self.overrides.insert(question_type, comparator);
    }

    /// Returns the comparator responsible for `question_type`.
    pub fn comparator_for(&self, question_type: QuestionType) -> &dyn AnswerComparator {
        if let Some(custom) = self.overrides.get(&question_type) {
            return custom.as_ref();
        }
        match question_type {
            QuestionType::McqSingle => &self.exact,
            QuestionType::McqMulti => &self.set,
            QuestionType::TrueFalse => &self.boolean,
            QuestionType::Numeric => &self.tolerance,
            QuestionType::ShortText => &self.text,
            QuestionType::Essay | QuestionType::Canvas | QuestionType::Unknown => &self.manual,
        }
    }
}

impl Default for ComparatorSet {
    fn default() -> Self {
        Self::new(&GradingOptions::default())
    }
}
