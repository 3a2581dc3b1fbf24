use veilgate::domain::{PatternRegistry, PiiCategory, Scrubber, truncate_to_chars};

fn scrubber() -> Scrubber {
    Scrubber::new(PatternRegistry::new())
}

#[test]
fn given_text_with_emails_when_scrubbing_then_every_occurrence_is_replaced_and_counted() {
    let result = scrubber().scrub("Write to a.b@x.com, cc b-c@y.org please");

    assert_eq!(
        result.sanitized_text,
        "Write to [EMAIL_REDACTED], cc [EMAIL_REDACTED] please"
    );
    assert_eq!(result.redaction_counts[&PiiCategory::Email], 2);
}

#[test]
fn given_text_without_pii_when_scrubbing_then_input_is_unchanged_and_counts_are_zero() {
    let input = "Just a normal sentence with numbers like 42 and 1234.";
    let result = scrubber().scrub(input);

    assert_eq!(result.sanitized_text, input);
    assert_eq!(result.total_redactions(), 0);
}

#[test]
fn given_empty_input_when_scrubbing_then_output_is_empty_and_counts_are_zero() {
    let result = scrubber().scrub("");

    assert_eq!(result.sanitized_text, "");
    assert!(result.redaction_counts.values().all(|&c| c == 0));
}

#[test]
fn given_already_scrubbed_text_when_scrubbing_again_then_output_is_identical() {
    let s = scrubber();
    let input = "jane@x.com, card 4111-1111-1111-1111, id 12345678A, tel 912 345 678";

    let once = s.scrub(input);
    let twice = s.scrub(&once.sanitized_text);

    assert_eq!(twice.sanitized_text, once.sanitized_text);
    assert_eq!(twice.total_redactions(), 0);
}

#[test]
fn given_credit_card_number_when_scrubbing_then_card_rule_wins_over_phone_rule() {
    let result = scrubber().scrub("4111-1111-1111-1111");

    assert_eq!(result.sanitized_text, "[CARD_REDACTED]");
    assert_eq!(result.redaction_counts[&PiiCategory::CreditCard], 1);
    assert_eq!(result.redaction_counts[&PiiCategory::PhoneNumber], 0);
}

#[test]
fn given_national_id_when_scrubbing_then_id_rule_wins() {
    let result = scrubber().scrub("12345678A");

    assert_eq!(result.sanitized_text, "[ID_REDACTED]");
    assert_eq!(result.redaction_counts[&PiiCategory::NationalId], 1);
}

#[test]
fn given_nine_digit_run_without_trailing_letter_when_scrubbing_then_phone_rule_matches() {
    let result = scrubber().scrub("123-456-789");

    assert_eq!(result.sanitized_text, "[PHONE_REDACTED]");
    assert_eq!(result.redaction_counts[&PiiCategory::PhoneNumber], 1);
    assert_eq!(result.redaction_counts[&PiiCategory::NationalId], 0);
}

#[test]
fn given_unseparated_nine_digit_run_when_scrubbing_then_phone_rule_matches() {
    let result = scrubber().scrub("call 912345678 now");

    assert_eq!(result.sanitized_text, "call [PHONE_REDACTED] now");
}

#[test]
fn given_mixed_document_context_when_scrubbing_then_email_and_phone_are_both_redacted() {
    let result = scrubber().scrub("Contact me at jane.doe@example.com or 91-234-5678.");

    assert_eq!(
        result.sanitized_text,
        "Contact me at [EMAIL_REDACTED] or [PHONE_REDACTED]."
    );
    assert_eq!(result.redaction_counts[&PiiCategory::Email], 1);
    assert_eq!(result.redaction_counts[&PiiCategory::PhoneNumber], 1);
}

#[test]
fn given_space_separated_card_when_scrubbing_then_card_rule_matches() {
    let result = scrubber().scrub("4111 1111 1111 1111");

    assert_eq!(result.sanitized_text, "[CARD_REDACTED]");
}

#[test]
fn given_long_text_when_truncating_then_cut_lands_on_a_char_boundary() {
    assert_eq!(truncate_to_chars("héllo wörld", 7), "héllo w");
    assert_eq!(truncate_to_chars("short", 100), "short");
    assert_eq!(truncate_to_chars("", 10), "");
}
