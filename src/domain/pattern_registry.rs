use regex::Regex;

use super::{PiiCategory, RedactionRule};

/// Ordered, immutable catalog of redaction rules.
///
/// Order matters: the most structurally distinctive patterns run first so a
/// looser pattern cannot partially consume a more specific match. The
/// canonical order is Email, CreditCard, NationalId, PhoneNumber. In
/// particular CreditCard must be evaluated before PhoneNumber, otherwise a
/// card number would be misread as phone-number fragments, and NationalId
/// before PhoneNumber so an 8-digits-plus-letter token is claimed by the
/// more specific rule.
pub struct PatternRegistry {
    rules: Vec<RedactionRule>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        let rules = vec![
            RedactionRule::new(
                PiiCategory::Email,
                Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap(),
                "[EMAIL_REDACTED]",
            ),
            RedactionRule::new(
                PiiCategory::CreditCard,
                Regex::new(r"\b\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}\b").unwrap(),
                "[CARD_REDACTED]",
            ),
            // Spanish DNI shape: eight digits and a single uppercase check letter.
            RedactionRule::new(
                PiiCategory::NationalId,
                Regex::new(r"\b\d{8}[A-Z]\b").unwrap(),
                "[ID_REDACTED]",
            ),
            // Nine digits with at most one hyphen, dot, or space between
            // neighbors. Covers 912 345 678, 123-456-789, and 91-234-5678.
            RedactionRule::new(
                PiiCategory::PhoneNumber,
                Regex::new(r"\b\d(?:[-. ]?\d){8}\b").unwrap(),
                "[PHONE_REDACTED]",
            ),
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
