//! Ordinal education hierarchy.
//!
//! 0 unspecified, 1 school/diploma/associate, 2 bachelor, 3 master/MBA,
//! 4 doctorate. Degree strings are checked highest level first: long keywords
//! by substring, short forms like `MS` or `M.D.` on word boundaries.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::schema::EducationEntry;

pub const UNSPECIFIED: u8 = 0;

const LEVELS: &[(u8, &[&str])] = &[
    (4, &["phd", "ph.d", "doctorate", "doctoral"]),
    (3, &["master", "mba", "m.b.a", "m.tech", "m.sc", "msc", "pgdm", "postgraduate"]),
    (
        2,
        &[
            "bachelor", "b.tech", "btech", "b.sc", "bsc", "b.s", "b.a", "b.e", "bca", "bba",
            "bcom", "b.com", "llb", "mbbs", "undergraduate",
        ],
    ),
    (1, &["associate", "diploma", "high school", "intermediate", "hsc"]),
];

static SHORT_FORMS: LazyLock<Vec<(u8, Regex)>> = LazyLock::new(|| {
    vec![
        (4, Regex::new(r"\b(md|m\.d)\b").expect("valid doctorate regex")),
        (3, Regex::new(r"\b(ms|ma|m\.s|m\.a)\b").expect("valid master regex")),
    ]
});

/// Level of a single degree string.
pub fn degree_level(degree: &str) -> u8 {
    let lower = degree.trim().to_lowercase();
    if lower.is_empty() {
        return UNSPECIFIED;
    }

    for (level, keywords) in LEVELS {
        let short_form = SHORT_FORMS
            .iter()
            .any(|(l, re)| l == level && re.is_match(&lower));
        if short_form || keywords.iter().any(|kw| lower.contains(kw)) {
            return *level;
        }
    }
    UNSPECIFIED
}

/// The highest-ranked entry and its level. Earlier entries win ties.
pub fn highest_degree(entries: &[EducationEntry]) -> Option<(&EducationEntry, u8)> {
    let mut best: Option<(&EducationEntry, u8)> = None;
    for entry in entries {
        let level = degree_level(&entry.degree);
        if level > best.map_or(UNSPECIFIED, |(_, l)| l) {
            best = Some((entry, level));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(name: &str) -> EducationEntry {
        EducationEntry {
            degree: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_degree_levels() {
        assert_eq!(degree_level("Ph.D. in Physics"), 4);
        assert_eq!(degree_level("Master of Science"), 3);
        assert_eq!(degree_level("MBA"), 3);
        assert_eq!(degree_level("B.Tech"), 2);
        assert_eq!(degree_level("Bachelor's degree"), 2);
        assert_eq!(degree_level("Associate Degree"), 1);
        assert_eq!(degree_level("High School Diploma"), 1);
        assert_eq!(degree_level("M.S. in Computer Science"), 3);
        assert_eq!(degree_level("MS Data Science"), 3);
        assert_eq!(degree_level("M.A. Economics"), 3);
        assert_eq!(degree_level("MD"), 4);
        assert_eq!(degree_level("M.D. Internal Medicine"), 4);
        assert_eq!(degree_level("MBBS"), 2);
        assert_eq!(degree_level("B.Com"), 2);
        assert_eq!(degree_level("BCom (Hons)"), 2);
        assert_eq!(degree_level("LLB"), 2);
        assert_eq!(degree_level("Not specified"), 0);
        assert_eq!(degree_level(""), 0);
    }

    #[test]
    fn test_short_forms_need_word_boundaries() {
        assert_eq!(degree_level("Diploma in Nursing"), 1);
        assert_eq!(degree_level("M.Des"), 0);
        assert_eq!(degree_level("Bootcamp alumni"), 0);
    }

    #[test]
    fn test_highest_degree_ignores_order() {
        let entries = vec![degree("B.Sc"), degree("Master of Engineering"), degree("Diploma")];
        let (entry, level) = highest_degree(&entries).unwrap();
        assert_eq!(entry.degree, "Master of Engineering");
        assert_eq!(level, 3);
    }

    #[test]
    fn test_highest_degree_none_when_unranked() {
        assert!(highest_degree(&[degree("Bootcamp certificate")]).is_none());
        assert!(highest_degree(&[]).is_none());
    }
}
