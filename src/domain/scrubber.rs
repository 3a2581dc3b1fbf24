use std::collections::BTreeMap;

use super::{PatternRegistry, ScrubResult};

/// Deterministic PII redaction over a single text blob.
///
/// Rules are applied sequentially in registry order, each pass operating on
/// the output of the previous one, and each pattern replaces every
/// non-overlapping occurrence. The scrubber is a pure function: no I/O, no
/// shared mutable state, and deliberately no logging, so PII can never leak
/// into a log sink from here. Callers that want an audit trail log the
/// returned counts themselves.
pub struct Scrubber {
    registry: PatternRegistry,
}

impl Scrubber {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn scrub(&self, text: &str) -> ScrubResult {
        let mut sanitized = text.to_string();
        let mut redaction_counts = BTreeMap::new();

        for rule in self.registry.rules() {
            let count = rule.pattern.find_iter(&sanitized).count();
            if count > 0 {
                sanitized = rule
                    .pattern
                    .replace_all(&sanitized, rule.placeholder)
                    .to_string();
            }
            redaction_counts.insert(rule.category, count);
        }

        ScrubResult {
            sanitized_text: sanitized,
            redaction_counts,
        }
    }
}

/// Truncates to at most `max_chars` characters, at a character boundary.
///
/// Truncation must happen before scrubbing, never after: cutting scrubbed
/// text could split a placeholder or re-expose half of a PII token.
pub fn truncate_to_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}
