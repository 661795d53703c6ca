//! Textual repair pass for near-JSON emitted by language models.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("valid trailing comma regex"));
static NONE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bNone\b").expect("valid None regex"));
static TRUE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bTrue\b").expect("valid True regex"));
static FALSE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bFalse\b").expect("valid False regex"));
static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([{,])\s*([A-Za-z_][A-Za-z0-9_]*)\s*:").expect("valid bare key regex")
});
static ADJACENT_OBJECTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s*\{").expect("valid adjacent object regex"));
static ADJACENT_ARRAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\s*\[").expect("valid adjacent array regex"));

const SMART_QUOTES: &[char] = &['\u{201C}', '\u{201D}', '\u{201E}', '\u{2018}', '\u{2019}', '\''];

/// Applies every textual fix in order and returns the repaired text.
///
/// The fixes are blind to JSON structure (apart from whitespace collapsing),
/// so this pass only runs once a strict parse has already failed.
pub fn repair(text: &str) -> String {
    debug!("Starting JSON fixes");

    let text: String = text
        .chars()
        .map(|c| if SMART_QUOTES.contains(&c) { '"' } else { c })
        .collect();

    let text = TRAILING_COMMA.replace_all(&text, "$1");
    let text = NONE_LITERAL.replace_all(&text, "null");
    let text = TRUE_LITERAL.replace_all(&text, "true");
    let text = FALSE_LITERAL.replace_all(&text, "false");
    let text = BARE_KEY.replace_all(&text, r#"${1}"${2}":"#);
    let text = ADJACENT_OBJECTS.replace_all(&text, "},{");
    let text = ADJACENT_ARRAYS.replace_all(&text, "],[");

    let text = collapse_whitespace_outside_strings(&text);
    let text: String = text
        .chars()
        .filter(|&c| c >= ' ' || matches!(c, '\n' | '\r' | '\t'))
        .collect();

    debug!("JSON fixes complete");
    text
}

/// Collapses each whitespace run outside a string literal into one space.
fn collapse_whitespace_outside_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c.is_whitespace() {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}
