use std::fmt;

use serde::{Deserialize, Serialize};

use crate::skills::SkillMatchResult;

/// Banded label over the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentLabel {
    Poor,
    Moderate,
    Good,
    Great,
    Excellent,
}

impl AssessmentLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => AssessmentLabel::Excellent,
            75..=89 => AssessmentLabel::Great,
            60..=74 => AssessmentLabel::Good,
            40..=59 => AssessmentLabel::Moderate,
            _ => AssessmentLabel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentLabel::Poor => "Poor Match",
            AssessmentLabel::Moderate => "Moderate Match",
            AssessmentLabel::Good => "Good Match",
            AssessmentLabel::Great => "Great Match",
            AssessmentLabel::Excellent => "Excellent Match",
        }
    }
}

impl fmt::Display for AssessmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceMatch {
    pub met: bool,
    pub candidate_experience: u32,
    pub required_experience: u32,
    pub percentage: u32, // 0 – 100
    pub score: u32,      // 0 – 35
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationMatch {
    pub met: bool,
    pub candidate_degree: String,
    pub required_degree: String,
    pub percentage: u32,
    pub score: u32, // 0 – 25
    pub is_overqualified: bool,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatch {
    pub met: bool,
    pub candidate_skills_count: usize,
    pub matched_skills_count: usize,
    pub required_skills_count: usize,
    pub percentage: u32,
    pub score: u32, // 0 – 40
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// One entry per matched required skill.
    pub skill_match_details: Vec<SkillMatchResult>,
    pub all_candidate_skills: Vec<String>,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaAnalysis {
    pub experience_match: ExperienceMatch,
    pub education_match: EducationMatch,
    pub skills_match: SkillsMatch,
}

impl CriteriaAnalysis {
    pub fn met_count(&self) -> usize {
        [
            self.experience_match.met,
            self.education_match.met,
            self.skills_match.met,
        ]
        .iter()
        .filter(|met| **met)
        .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub experience_match: u32,
    pub education_match: u32,
    pub skills_match: u32,
}

impl SectionScores {
    pub fn total(&self) -> u32 {
        self.experience_match + self.education_match + self.skills_match
    }
}

/// Full scoring result for one resume against one requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub criteria_analysis: CriteriaAnalysis,
    pub section_scores: SectionScores,
    pub overall_score: u32, // 0 – 100
    pub assessment: AssessmentLabel,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub scorer_backend: String,
}
