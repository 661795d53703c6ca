//! Locates the candidate JSON object inside a raw LLM response.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::errors::MatchError;
use crate::recovery::scan::unclosed_counts;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?\n?").expect("valid fence regex"));
static BACKTICK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`+").expect("valid backtick regex"));

/// A trailing fragment longer than this is kept even when its quotes are unbalanced.
const DANGLING_FIELD_MAX_LEN: usize = 100;

/// Strips ```json ... ``` / ``` ... ``` fences and stray backtick runs.
pub fn strip_code_fences(text: &str) -> String {
    let text = CODE_FENCE.replace_all(text.trim(), "");
    BACKTICK_RUN.replace_all(&text, "").trim().to_string()
}

/// Extracts the text of one candidate object from `raw`.
///
/// The result always starts with `{`. When the response was cut off before
/// its final `}`, the missing closers are appended (brackets first, then
/// braces) after dropping a dangling half-written field.
pub fn recover(raw: &str) -> Result<String, MatchError> {
    if raw.trim().is_empty() {
        warn!("No response text provided");
        return Err(MatchError::EmptyResponse);
    }

    let text = strip_code_fences(raw);

    let Some(start) = text.find('{') else {
        warn!("No JSON object found (no opening {{)");
        return Err(MatchError::NoOpeningBrace);
    };

    match text.rfind('}') {
        Some(end) if end > start => {
            let slice = &text[start..=end];
            debug!("Extracted JSON: {} chars", slice.len());
            Ok(slice.to_string())
        }
        _ => {
            warn!("No closing brace found. JSON is truncated.");
            Ok(auto_complete(&text[start..]))
        }
    }
}

/// Closes every structure left open by a truncated response.
pub(crate) fn auto_complete(partial: &str) -> String {
    info!("Auto-completing truncated JSON");

    let mut completed = drop_dangling_field(partial).to_string();
    let (open_braces, open_brackets) = unclosed_counts(&completed);

    completed.push_str(&"]".repeat(open_brackets));
    completed.push_str(&"}".repeat(open_braces));

    info!(
        "Auto-completed: added {} brackets and {} braces",
        open_brackets, open_braces
    );
    completed
}

/// Cuts a short trailing fragment with an unterminated string at the last comma.
fn drop_dangling_field(partial: &str) -> &str {
    let Some(last_comma) = partial.rfind(',') else {
        return partial;
    };
    let after_comma = partial[last_comma..].trim();
    let quotes = after_comma.matches('"').count();

    if after_comma.chars().count() < DANGLING_FIELD_MAX_LEN && quotes % 2 != 0 {
        debug!("Removing incomplete field after last comma");
        &partial[..last_comma]
    } else {
        partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_recover_slices_prose_around_object() {
        let raw = "Sure! Here is the JSON:\n{\"role\": \"Engineer\"}\nLet me know.";
        assert_eq!(recover(raw).unwrap(), "{\"role\": \"Engineer\"}");
    }

    #[test]
    fn test_recover_empty_response() {
        assert!(matches!(recover("   "), Err(MatchError::EmptyResponse)));
    }

    #[test]
    fn test_recover_without_opening_brace() {
        assert!(matches!(
            recover("I could not parse the resume."),
            Err(MatchError::NoOpeningBrace)
        ));
    }

    #[test]
    fn test_recover_closes_truncated_object() {
        let raw = r#"{"role": "Engineer", "skills": ["Rust", "Go""#;
        assert_eq!(
            recover(raw).unwrap(),
            r#"{"role": "Engineer", "skills": ["Rust", "Go"]}"#
        );
    }

    #[test]
    fn test_recover_drops_dangling_string_field() {
        let raw = r#"{"role": "Engineer", "summary": "Built distrib"#;
        assert_eq!(recover(raw).unwrap(), r#"{"role": "Engineer"}"#);
    }

    #[test]
    fn test_recover_keeps_long_trailing_fragment() {
        let long = "x".repeat(150);
        let raw = format!(r#"{{"a": 1, "summary": "{long}"#);
        let recovered = recover(&raw).unwrap();
        assert!(recovered.contains(&long));
        assert!(recovered.ends_with('}'));
    }

    #[test]
    fn test_recover_closing_brace_before_opening_is_truncation() {
        let raw = r#"} noise {"a": [1, 2"#;
        assert_eq!(recover(raw).unwrap(), r#"{"a": [1, 2]}"#);
    }
}
