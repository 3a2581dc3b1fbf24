use regex::Regex;

use super::PiiCategory;

/// A single redaction rule: a pattern over text and the fixed placeholder
/// that replaces every match.
///
/// Rules are built once at registry construction and never mutated.
/// Placeholders must be distinct per category and must not themselves match
/// any rule's pattern, otherwise scrubbing would not be idempotent.
#[derive(Debug, Clone)]
pub struct RedactionRule {
    pub category: PiiCategory,
    pub pattern: Regex,
    pub placeholder: &'static str,
}

impl RedactionRule {
    pub fn new(category: PiiCategory, pattern: Regex, placeholder: &'static str) -> Self {
        Self {
            category,
            pattern,
            placeholder,
        }
    }
}
