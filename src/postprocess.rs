use regex::Regex;
use std::sync::LazyLock;

use crate::prompts::ASSUMPTIONS_LINE;

static ASSUMPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)assumption").expect("invalid regex"));

const ELLIPSIS: &str = "...";

/// Append the assumptions clause unless the text already talks about assumptions
///
/// Empty text is returned as-is.
pub fn ensure_assumptions_clause(text: &str) -> String {
    if text.is_empty() || ASSUMPTION_RE.is_match(text) {
        return text.to_string();
    }

    format!(
        "{}\n\nAssumptions & Clarifications:\n- {}",
        text.trim_end(),
        ASSUMPTIONS_LINE
    )
}

/// Cut `text` down to at most `max_chars` characters
///
/// Truncated output ends with `...` and is exactly `max_chars` long.
pub fn truncate_to_limit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(&ELLIPSIS[..max_chars.min(ELLIPSIS.len())]);
    out
}

/// Clause enforcement followed by truncation
pub fn finalize(text: &str, max_chars: usize) -> String {
    truncate_to_limit(&ensure_assumptions_clause(text), max_chars)
}
