use std::collections::HashSet;

use veilgate::domain::{PatternRegistry, PiiCategory};

#[test]
fn given_registry_when_iterating_then_canonical_order_is_preserved() {
    let registry = PatternRegistry::new();
    let categories: Vec<PiiCategory> = registry.rules().iter().map(|r| r.category).collect();

    assert_eq!(
        categories,
        vec![
            PiiCategory::Email,
            PiiCategory::CreditCard,
            PiiCategory::NationalId,
            PiiCategory::PhoneNumber,
        ]
    );
}

#[test]
fn given_registry_when_collecting_placeholders_then_all_are_distinct() {
    let registry = PatternRegistry::new();
    let placeholders: HashSet<&str> = registry.rules().iter().map(|r| r.placeholder).collect();

    assert_eq!(placeholders.len(), registry.rules().len());
}

#[test]
fn given_any_placeholder_when_matched_against_any_rule_then_no_rule_fires() {
    let registry = PatternRegistry::new();

    for placeholder_rule in registry.rules() {
        for rule in registry.rules() {
            assert!(
                !rule.pattern.is_match(placeholder_rule.placeholder),
                "{} placeholder re-matches the {} rule",
                placeholder_rule.category,
                rule.category
            );
        }
    }
}
