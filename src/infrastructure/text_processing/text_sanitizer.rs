use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static SPLIT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Normalizes extracted document text before it is scrubbed: NFKC
/// normalization (so ligatures and fullwidth digits cannot hide a PII token
/// from the patterns), re-joining of words hyphenated across line breaks,
/// and whitespace collapse with paragraph breaks preserved.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = SPLIT_WORD.replace_all(&normalized, "$prefix$suffix");

    let mut result = String::with_capacity(rejoined.len());
    let mut pending_break: Option<&str> = None;

    for line in rejoined.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !result.is_empty() {
                pending_break = Some("\n\n");
            }
            continue;
        }

        if let Some(sep) = pending_break.take() {
            result.push_str(sep);
        } else if !result.is_empty() {
            result.push('\n');
        }
        push_collapsed(trimmed, &mut result);
    }

    result
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
