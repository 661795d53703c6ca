use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Which schema an LLM response is normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "Resume")]
    Resume,
    #[serde(rename = "Job Description")]
    JobDescription,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::JobDescription => "Job Description",
        }
    }

    /// Fields whose absence triggers the default-record merge.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Resume => &["role", "totalYearsExperience", "skills", "education"],
            DocumentKind::JobDescription => &["jobTitle", "requiredSkills", "minExperienceYears"],
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resume" => Ok(DocumentKind::Resume),
            "job description" | "job_description" | "jd" | "requirement" => {
                Ok(DocumentKind::JobDescription)
            }
            other => Err(MatchError::UnknownDocumentKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    /// Free-form start date as written in the source document.
    pub start: String,
    /// Free-form end date; may be a sentinel such as "Present".
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub role: String,
    pub total_years_experience: u32,
    pub experience_entries: Vec<ExperienceEntry>,
    /// Lowercased, deduplicated, at most 20.
    pub skills: Vec<Skill>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub summary: String,
    /// "N years M months", set only when the aggregated tenure has spare months.
    pub total_experience_formatted: Option<String>,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            role: "Not extracted".to_string(),
            total_years_experience: 0,
            experience_entries: Vec::new(),
            skills: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            summary: "Error parsing this document".to_string(),
            total_experience_formatted: None,
        }
    }
}

impl ResumeRecord {
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementRecord {
    pub job_title: String,
    pub min_experience_years: u32,
    pub required_education: String,
    /// Deduplicated case-insensitively, at most 25.
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
}

impl Default for RequirementRecord {
    fn default() -> Self {
        Self {
            job_title: "Not extracted".to_string(),
            min_experience_years: 0,
            required_education: "Not specified".to_string(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            description: String::new(),
            responsibilities: Vec::new(),
            benefits: Vec::new(),
        }
    }
}

/// Output of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedRecord {
    Resume(ResumeRecord),
    Requirement(RequirementRecord),
}

impl NormalizedRecord {
    /// The all-fields-present fallback for `kind`.
    pub fn default_for(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Resume => NormalizedRecord::Resume(ResumeRecord::default()),
            DocumentKind::JobDescription => {
                NormalizedRecord::Requirement(RequirementRecord::default())
            }
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            NormalizedRecord::Resume(_) => DocumentKind::Resume,
            NormalizedRecord::Requirement(_) => DocumentKind::JobDescription,
        }
    }

    pub fn into_resume(self) -> Option<ResumeRecord> {
        match self {
            NormalizedRecord::Resume(r) => Some(r),
            NormalizedRecord::Requirement(_) => None,
        }
    }

    pub fn into_requirement(self) -> Option<RequirementRecord> {
        match self {
            NormalizedRecord::Requirement(r) => Some(r),
            NormalizedRecord::Resume(_) => None,
        }
    }
}
