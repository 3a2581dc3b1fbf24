use std::collections::BTreeMap;

use serde::Serialize;

use super::PiiCategory;

/// Outcome of scrubbing a single text blob: the sanitized text plus the
/// number of replacements per category. Produced fresh per call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubResult {
    pub sanitized_text: String,
    pub redaction_counts: BTreeMap<PiiCategory, usize>,
}

impl ScrubResult {
    pub fn total_redactions(&self) -> usize {
        self.redaction_counts.values().sum()
    }
}

/// Aggregated redaction counts across several scrubbed surfaces.
///
/// This is audit data for the caller; it is never merged back into the
/// sanitized text. Only categories that actually fired appear in the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RedactionReport {
    counts: BTreeMap<PiiCategory, usize>,
}

impl RedactionReport {
    pub fn absorb(&mut self, result: &ScrubResult) {
        for (category, count) in &result.redaction_counts {
            if *count > 0 {
                *self.counts.entry(*category).or_insert(0) += count;
            }
        }
    }

    pub fn counts(&self) -> &BTreeMap<PiiCategory, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
