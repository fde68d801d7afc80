use crate::options::TextMatching;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Normalizes a free-text answer so that equivalent spellings compare equal.
pub fn normalize_text(s: &str, matching: &TextMatching) -> String {
    let trimmed = s.trim();
    let collapsed: Cow<'_, str> = if matching.collapse_whitespace {
        WHITESPACE_RUN.replace_all(trimmed, " ")
    } else {
        Cow::Borrowed(trimmed)
    };
    if matching.case_sensitive {
        collapsed.into_owned()
    } else {
        collapsed.to_lowercase()
    }
}
