//! Schema normalizer: untyped JSON object in, fully typed record out.
//!
//! Never fails. Missing or mistyped fields are coerced or defaulted so the
//! scoring engine always receives a complete record.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::MatchError;
use crate::extraction::schema::{
    DocumentKind, EducationEntry, ExperienceEntry, NormalizedRecord, RequirementRecord,
    ResumeRecord, Skill,
};

pub const MAX_RESUME_SKILLS: usize = 20;
pub const MAX_REQUIRED_SKILLS: usize = 25;
const MIN_SKILL_CHARS: usize = 2;
const MAX_SKILL_CHARS: usize = 50;

/// Coerces `obj` into the record type for `kind`.
pub fn normalize(obj: &Map<String, Value>, kind: DocumentKind) -> NormalizedRecord {
    let missing = missing_required_fields(obj, kind);
    if !missing.is_empty() {
        warn!(
            "{}; merging {} defaults",
            MatchError::MissingRequiredFields(missing),
            kind
        );
    }

    match kind {
        DocumentKind::Resume => NormalizedRecord::Resume(normalize_resume(obj)),
        DocumentKind::JobDescription => {
            NormalizedRecord::Requirement(normalize_requirement(obj))
        }
    }
}

pub fn missing_required_fields(obj: &Map<String, Value>, kind: DocumentKind) -> Vec<String> {
    kind.required_fields()
        .iter()
        .filter(|field| present(obj, field).is_none())
        .map(|field| field.to_string())
        .collect()
}

pub fn normalize_resume(obj: &Map<String, Value>) -> ResumeRecord {
    let defaults = ResumeRecord::default();

    let experience_entries = present(obj, "experienceEntries")
        .or_else(|| present(obj, "experienceDetails"))
        .map(|v| as_list(v).into_iter().filter_map(experience_entry).collect())
        .unwrap_or_default();

    let skill_names: Vec<String> = present(obj, "skills")
        .map(|v| as_list(v).into_iter().filter_map(named_text).collect())
        .unwrap_or_default();
    let skills = dedup_skills(skill_names, MAX_RESUME_SKILLS, true)
        .into_iter()
        .map(|name| Skill { name })
        .collect::<Vec<_>>();

    let education = present(obj, "education")
        .map(|v| as_list(v).into_iter().filter_map(education_entry).collect())
        .unwrap_or_default();

    let record = ResumeRecord {
        role: present(obj, "role").and_then(text).unwrap_or(defaults.role),
        total_years_experience: present(obj, "totalYearsExperience")
            .map(count)
            .unwrap_or(defaults.total_years_experience),
        experience_entries,
        skills,
        education,
        certifications: string_list(obj, "certifications"),
        summary: present(obj, "summary").and_then(text).unwrap_or_default(),
        total_experience_formatted: None,
    };

    debug!(
        "Resume validated: {} skills, {} education entries",
        record.skills.len(),
        record.education.len()
    );
    record
}

pub fn normalize_requirement(obj: &Map<String, Value>) -> RequirementRecord {
    let defaults = RequirementRecord::default();

    let required_education = present(obj, "requiredEducation")
        .and_then(text)
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.required_education);

    let record = RequirementRecord {
        job_title: present(obj, "jobTitle").and_then(text).unwrap_or(defaults.job_title),
        min_experience_years: present(obj, "minExperienceYears")
            .map(count)
            .unwrap_or(defaults.min_experience_years),
        required_education,
        required_skills: dedup_skills(string_list(obj, "requiredSkills"), MAX_REQUIRED_SKILLS, false),
        preferred_skills: dedup_skills(string_list(obj, "preferredSkills"), MAX_REQUIRED_SKILLS, false),
        description: present(obj, "description").and_then(text).unwrap_or_default(),
        responsibilities: string_list(obj, "responsibilities"),
        benefits: string_list(obj, "benefits"),
    };

    debug!(
        "JD validated: {} years experience, {} required skills",
        record.min_experience_years,
        record.required_skills.len()
    );
    record
}

/// Trims, drops out-of-range lengths, deduplicates case-insensitively, caps.
///
/// With `lowercase` the kept spelling is the lowercased one; otherwise the
/// first-seen spelling wins.
pub fn dedup_skills(names: Vec<String>, cap: usize, lowercase: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for name in names {
        let trimmed = name.trim();
        let len = trimmed.chars().count();
        if !(MIN_SKILL_CHARS..=MAX_SKILL_CHARS).contains(&len) {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.insert(key.clone()) {
            unique.push(if lowercase { key } else { trimmed.to_string() });
        }
        if unique.len() == cap {
            break;
        }
    }

    unique
}

/// Non-null value under `key`.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// A list field, or a bare scalar treated as a one-element list.
fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text of a list element that may be a bare string or a `{name: ...}` object.
fn named_text(value: &Value) -> Option<String> {
    let name = match value {
        Value::Object(obj) => obj.get("name").and_then(text),
        other => text(other),
    }?;
    (!name.is_empty()).then_some(name)
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    present(obj, key)
        .map(|v| as_list(v).into_iter().filter_map(named_text).collect())
        .unwrap_or_default()
}

/// Non-negative whole number from a number or numeric string; anything else is 0.
fn count(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn year(value: &Value) -> Option<i32> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (parsed.is_finite() && parsed > 0.0).then(|| parsed.trunc() as i32)
}

fn experience_entry(value: &Value) -> Option<ExperienceEntry> {
    let Value::Object(obj) = value else {
        return None;
    };
    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| present(obj, k).and_then(text))
            .unwrap_or_default()
    };
    Some(ExperienceEntry {
        role: field(&["role", "title"]),
        company: field(&["company"]),
        start: field(&["startDate", "start"]),
        end: field(&["endDate", "end"]),
    })
}

fn education_entry(value: &Value) -> Option<EducationEntry> {
    match value {
        Value::Object(obj) => Some(EducationEntry {
            degree: present(obj, "degree").and_then(text).unwrap_or_default(),
            field: present(obj, "field").and_then(text).unwrap_or_default(),
            year: present(obj, "year").and_then(year),
        }),
        other => text(other)
            .filter(|s| !s.is_empty())
            .map(|degree| EducationEntry {
                degree,
                ..Default::default()
            }),
    }
}
