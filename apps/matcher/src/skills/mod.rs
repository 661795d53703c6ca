// Skill equivalence: exact, canonical group, fuzzy, then substring.

pub mod aliases;
pub mod similarity;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use aliases::SkillAliasTable;

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const GROUP_CONFIDENCE: f64 = 0.95;
pub const FUZZY_THRESHOLD: f64 = 0.70;
pub const SUBSTRING_CONFIDENCE: f64 = 0.88;
/// Both sides must be longer than this for a substring match.
const SUBSTRING_MIN_CHARS: usize = 3;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid regex"));

static BUILTIN_TABLE: LazyLock<SkillAliasTable> = LazyLock::new(SkillAliasTable::builtin);

/// Maps a skill name to the canonical name of its equivalence group.
pub trait SkillGroupLookup: Send + Sync {
    fn lookup_group(&self, skill: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    CanonicalGroup,
    Fuzzy,
    Substring,
    #[serde(rename = "none")]
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillMatch {
    pub is_match: bool,
    pub kind: MatchKind,
    pub confidence: f64,
}

impl SkillMatch {
    fn hit(kind: MatchKind, confidence: f64) -> Self {
        Self {
            is_match: true,
            kind,
            confidence,
        }
    }

    fn miss() -> Self {
        Self {
            is_match: false,
            kind: MatchKind::NoMatch,
            confidence: 0.0,
        }
    }
}

/// Outcome for one required skill against a whole candidate skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchResult {
    pub required: String,
    pub matched: Option<String>,
    pub kind: MatchKind,
    /// Rounded to two decimals.
    pub confidence: f64,
}

impl SkillMatchResult {
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

/// Lowercase, keep only `[a-z0-9]` and whitespace, collapse whitespace.
pub fn normalize_skill(skill: &str) -> String {
    let lower = skill.trim().to_lowercase();
    NON_ALNUM
        .replace_all(&lower, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves against the bundled alias table.
pub fn resolve(candidate: &str, required: &str) -> SkillMatch {
    resolve_with(&*BUILTIN_TABLE, candidate, required)
}

pub fn resolve_with(lookup: &dyn SkillGroupLookup, candidate: &str, required: &str) -> SkillMatch {
    let cand = normalize_skill(candidate);
    let req = normalize_skill(required);

    if cand.is_empty() || req.is_empty() {
        return SkillMatch::miss();
    }

    if cand == req {
        return SkillMatch::hit(MatchKind::Exact, EXACT_CONFIDENCE);
    }

    if let (Some(a), Some(b)) = (lookup.lookup_group(candidate), lookup.lookup_group(required)) {
        if a == b {
            return SkillMatch::hit(MatchKind::CanonicalGroup, GROUP_CONFIDENCE);
        }
    }

    let ratio = similarity::ratio(&cand, &req);
    if ratio >= FUZZY_THRESHOLD {
        return SkillMatch::hit(MatchKind::Fuzzy, ratio);
    }

    if cand.chars().count() > SUBSTRING_MIN_CHARS
        && req.chars().count() > SUBSTRING_MIN_CHARS
        && (cand.contains(&req) || req.contains(&cand))
    {
        return SkillMatch::hit(MatchKind::Substring, SUBSTRING_CONFIDENCE);
    }

    SkillMatch::miss()
}

pub fn best_match<S: AsRef<str>>(required: &str, candidates: &[S]) -> SkillMatchResult {
    best_match_with(&*BUILTIN_TABLE, required, candidates)
}

/// Tries every candidate and keeps the strictly highest-confidence hit, so
/// among equal scores the earliest candidate wins.
pub fn best_match_with<S: AsRef<str>>(
    lookup: &dyn SkillGroupLookup,
    required: &str,
    candidates: &[S],
) -> SkillMatchResult {
    let mut best: Option<(&str, SkillMatch)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let m = resolve_with(lookup, candidate, required);
        if !m.is_match {
            continue;
        }
        if best.map_or(true, |(_, b)| m.confidence > b.confidence) {
            best = Some((candidate, m));
        }
    }

    match best {
        Some((candidate, m)) => SkillMatchResult {
            required: required.to_string(),
            matched: Some(candidate.to_string()),
            kind: m.kind,
            confidence: (m.confidence * 100.0).round() / 100.0,
        },
        None => SkillMatchResult {
            required: required.to_string(),
            matched: None,
            kind: MatchKind::NoMatch,
            confidence: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Node.JS  "), "nodejs");
        assert_eq!(normalize_skill("Machine   Learning"), "machine learning");
        assert_eq!(normalize_skill("C++"), "c");
        assert_eq!(normalize_skill("!!!"), "");
    }

    #[test]
    fn test_exact_after_normalization() {
        let m = resolve("Type-Script", "typescript");
        assert_eq!(m.kind, MatchKind::Exact);
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn test_canonical_group_match() {
        let m = resolve("ReactJS", "React");
        assert!(m.is_match);
        assert_eq!(m.kind, MatchKind::CanonicalGroup);
        assert_eq!(m.confidence, 0.95);
    }

    #[test]
    fn test_unrelated_skills_do_not_match() {
        let m = resolve("Python", "Java");
        assert!(!m.is_match);
        assert_eq!(m.kind, MatchKind::NoMatch);
        assert_eq!(m.confidence, 0.0);
    }

    #[test]
    fn test_fuzzy_match_carries_ratio() {
        let m = resolve("Kubernets", "Kubernetes");
        assert_eq!(m.kind, MatchKind::Fuzzy);
        assert!((m.confidence - 18.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_threshold_is_inclusive() {
        let table = SkillAliasTable::from_groups(Vec::<(&str, Vec<&str>)>::new());

        // 7 shared of 20 characters: exactly 0.70
        let at = resolve_with(&table, "abcdefghij", "abcdefgxyz");
        assert_eq!(at.kind, MatchKind::Fuzzy);
        assert_eq!(at.confidence, FUZZY_THRESHOLD);

        // 8 shared of 23 characters: just under
        let below = resolve_with(&table, "abcdefghxyz", "abcdefghpqrs");
        assert!(!below.is_match);
        assert_eq!(below.kind, MatchKind::NoMatch);
    }

    #[test]
    fn test_substring_match() {
        let m = resolve("Advanced Microsoft Excel Reporting", "Excel");
        assert_eq!(m.kind, MatchKind::Substring);
        assert_eq!(m.confidence, 0.88);
    }

    #[test]
    fn test_short_strings_never_substring_match() {
        assert!(!resolve("sql server administration", "sql").is_match);
    }

    #[test]
    fn test_empty_input_is_no_match() {
        assert!(!resolve("", "Rust").is_match);
        assert!(!resolve("Rust", "***").is_match);
    }

    #[test]
    fn test_injected_lookup() {
        let table = SkillAliasTable::from_groups([("observability", ["grafana", "prometheus"])]);
        let m = resolve_with(&table, "Grafana", "Prometheus");
        assert_eq!(m.kind, MatchKind::CanonicalGroup);
        assert!(!resolve_with(&SkillAliasTable::default(), "ReactJS", "Angular").is_match);
    }

    #[test]
    fn test_best_match_prefers_higher_confidence() {
        let result = best_match("React", &["reactjs", "react"]);
        assert_eq!(result.matched.as_deref(), Some("react"));
        assert_eq!(result.kind, MatchKind::Exact);
    }

    #[test]
    fn test_best_match_keeps_first_of_equal_scores() {
        let result = best_match("React", &["react.js", "reactjs"]);
        assert_eq!(result.matched.as_deref(), Some("react.js"));
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_best_match_without_hits() {
        let result = best_match("Haskell", &["python", "java"]);
        assert!(!result.is_match());
        assert_eq!(result.kind, MatchKind::NoMatch);
    }

    #[test]
    fn test_match_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&MatchKind::CanonicalGroup).unwrap(), r#""canonical_group""#);
        assert_eq!(serde_json::to_string(&MatchKind::NoMatch).unwrap(), r#""none""#);
    }
}
