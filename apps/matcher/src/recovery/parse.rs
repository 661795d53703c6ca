//! Three-tier JSON parser: strict, repaired, then aggressive recovery.

use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::errors::MatchError;
use crate::recovery::repair::repair;
use crate::recovery::scan::{closers_for, scan};

/// Parses recovered text into a JSON object, escalating through the tiers.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, MatchError> {
    if let Some(obj) = strict(text) {
        info!("JSON parsed on first attempt");
        return Ok(obj);
    }

    let repaired = repair(text);
    if let Some(obj) = strict(&repaired) {
        info!("JSON parsed after standard fixes");
        return Ok(obj);
    }

    info!("Attempting aggressive JSON recovery");
    for base in [text, repaired.as_str()] {
        for candidate in aggressive_candidates(base) {
            if let Some(obj) = strict(&candidate) {
                info!("JSON parsed after aggressive recovery");
                return Ok(obj);
            }
        }
    }

    error!(
        "All parse attempts failed. Problematic JSON (first 300 chars): {}",
        text.chars().take(300).collect::<String>()
    );
    Err(MatchError::Unparseable)
}

fn strict(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(other) => {
            debug!("Parsed JSON is not an object: {}", type_name(&other));
            None
        }
        Err(e) => {
            debug!(
                "Parse failed at line {} column {}: {e}",
                e.line(),
                e.column()
            );
            None
        }
    }
}

/// Builds closed-off variants of `text`, most faithful first.
///
/// 1. The longest consistently nested prefix, closed, unless it ends inside a
///    string or right after a key.
/// 2. The last structural checkpoint inside that prefix, closed.
pub(crate) fn aggressive_candidates(text: &str) -> Vec<String> {
    let text = match text.find('{') {
        Some(start) => &text[start..],
        None => return Vec::new(),
    };

    let report = scan(text);
    if report.stopped_early {
        debug!(
            "Nesting breaks at byte {}; closing the consistent prefix",
            report.consistent_len
        );
    }
    let mut candidates = Vec::new();

    if !report.in_string {
        let prefix = trim_dangling(&text[..report.consistent_len]);
        if !prefix.ends_with(':') {
            candidates.push(format!("{prefix}{}", closers_for(&report.open)));
        }
    }

    if let Some(checkpoint) = &report.checkpoint {
        let prefix = trim_dangling(&text[..checkpoint.end]);
        let candidate = format!("{prefix}{}", closers_for(&checkpoint.open));
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    candidates
}

fn trim_dangling(text: &str) -> &str {
    text.trim_end().trim_end_matches(',').trim_end()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_json_parses_on_first_tier() {
        let obj = parse_object(r#"{"role": "Engineer", "skills": ["Rust"]}"#).unwrap();
        assert_eq!(Value::Object(obj), json!({"role": "Engineer", "skills": ["Rust"]}));
    }

    #[test]
    fn test_repair_tier_handles_python_style_dict() {
        let obj = parse_object("{'role': 'Engineer', 'active': True, 'skills': ['Rust',],}").unwrap();
        assert_eq!(obj["role"], "Engineer");
        assert_eq!(obj["active"], true);
        assert_eq!(obj["skills"], json!(["Rust"]));
    }

    #[test]
    fn test_aggressive_tier_fixes_wrong_closer_order() {
        // Bracket-first closing is wrong when an object sits inside the array.
        let obj = parse_object(r#"{"education": [{"degree": "BSc"]}"#).unwrap();
        assert_eq!(obj["education"], json!([{"degree": "BSc"}]));
    }

    #[test]
    fn test_aggressive_tier_falls_back_to_checkpoint() {
        let obj = parse_object(r#"{"role": "Engineer", "summary": "cut off"#).unwrap();
        assert_eq!(Value::Object(obj), json!({"role": "Engineer"}));
    }

    #[test]
    fn test_non_object_is_unparseable() {
        assert!(matches!(parse_object("[1, 2, 3]"), Err(MatchError::Unparseable)));
    }

    #[test]
    fn test_garbage_is_unparseable() {
        assert!(matches!(
            parse_object("{ this is :: not json at all ]]]"),
            Err(MatchError::Unparseable)
        ));
    }

    #[test]
    fn test_candidates_close_innermost_first() {
        let candidates = aggressive_candidates(r#"{"a": [{"b": 1"#);
        assert_eq!(candidates[0], r#"{"a": [{"b": 1}]}"#);
    }
}
