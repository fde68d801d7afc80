//! Tunable grading behaviour.
//!
//! Only `short_text` matching is configurable; every other question type has a fixed rule.

use serde::{Deserialize, Serialize};

/// How `short_text` answers are normalized before comparison.
///
/// Leading and trailing whitespace is always trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextMatching {
    /// Compare letters exactly instead of case-folding both sides.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Collapse runs of internal whitespace into a single space.
    #[serde(default)]
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradingOptions {
    #[serde(default)]
    pub text_matching: TextMatching,
}
