//! Scoring engine: a pluggable, trait-based scorer that measures a resume
//! against a requirement.
//!
//! Default: `RuleBasedScorer` (experience ≤35, education ≤25, skills ≤40).
//! Callers hold an `Arc<dyn MatchScorer>` and can swap backends freely.

pub mod education;
pub mod ranking;
pub mod report;

use std::sync::{Arc, LazyLock};

use tracing::{error, info};

use crate::errors::MatchError;
use crate::extraction::schema::{RequirementRecord, ResumeRecord};
use crate::skills::{best_match_with, SkillAliasTable, SkillGroupLookup};

pub use ranking::{rank_candidates, RankedCandidate};
pub use report::{
    AssessmentLabel, CriteriaAnalysis, EducationMatch, ExperienceMatch, MatchReport,
    SectionScores, SkillsMatch,
};

pub const EXPERIENCE_WEIGHT: u32 = 35;
pub const EDUCATION_WEIGHT: u32 = 25;
pub const SKILLS_WEIGHT: u32 = 40;
/// Skills are "met" from this percentage of required skills matched.
const SKILLS_MET_PERCENTAGE: u32 = 50;

static DEFAULT_SCORER: LazyLock<RuleBasedScorer> = LazyLock::new(RuleBasedScorer::default);

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the batch driver.
pub trait MatchScorer: Send + Sync {
    /// Short backend tag recorded in every report.
    fn backend(&self) -> &'static str;

    fn score(&self, resume: &ResumeRecord, requirement: &RequirementRecord) -> MatchReport;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct RuleBasedScorer {
    lookup: Arc<dyn SkillGroupLookup>,
}

impl RuleBasedScorer {
    pub fn new(lookup: Arc<dyn SkillGroupLookup>) -> Self {
        Self { lookup }
    }
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self::new(Arc::new(SkillAliasTable::builtin()))
    }
}

impl MatchScorer for RuleBasedScorer {
    fn backend(&self) -> &'static str {
        "rule_based"
    }

    fn score(&self, resume: &ResumeRecord, requirement: &RequirementRecord) -> MatchReport {
        let experience = experience_match(resume, requirement);
        let education = education_match(resume, requirement);
        let skills = skills_match(self.lookup.as_ref(), resume, requirement);

        let section_scores = SectionScores {
            experience_match: experience.score,
            education_match: education.score,
            skills_match: skills.score,
        };
        let overall_score = section_scores.total().min(100);
        let assessment = AssessmentLabel::from_score(overall_score);

        let mut gaps = Vec::new();
        if !experience.met {
            gaps.push(format!("Experience: {}% match", experience.percentage));
        }
        if !education.met {
            gaps.push(format!("Education: {}% match", education.percentage));
        }
        if !skills.met {
            gaps.push(format!("Skills: {}% match", skills.percentage));
        }

        let recommendations = vec![
            experience.details.clone(),
            education.details.clone(),
            skills.details.clone(),
        ];

        let criteria_analysis = CriteriaAnalysis {
            experience_match: experience,
            education_match: education,
            skills_match: skills,
        };
        let summary = summarize(criteria_analysis.met_count(), overall_score);

        info!(
            "Overall: {overall_score}/100 - {assessment} (experience {}/{EXPERIENCE_WEIGHT}, education {}/{EDUCATION_WEIGHT}, skills {}/{SKILLS_WEIGHT})",
            section_scores.experience_match,
            section_scores.education_match,
            section_scores.skills_match,
        );

        MatchReport {
            criteria_analysis,
            section_scores,
            overall_score,
            assessment,
            gaps,
            recommendations,
            summary,
            scorer_backend: self.backend().to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Scores with the default rule-based backend.
pub fn calculate_match(
    resume: Option<&ResumeRecord>,
    requirement: Option<&RequirementRecord>,
) -> Result<MatchReport, MatchError> {
    calculate_match_with(&*DEFAULT_SCORER, resume, requirement)
}

/// Fails only when both records are absent; a single absent record is
/// replaced by its default.
pub fn calculate_match_with(
    scorer: &dyn MatchScorer,
    resume: Option<&ResumeRecord>,
    requirement: Option<&RequirementRecord>,
) -> Result<MatchReport, MatchError> {
    info!("Match calculation started");

    let (default_resume, default_requirement);
    let (resume, requirement) = match (resume, requirement) {
        (None, None) => {
            error!("Match calculation error: {}", MatchError::MissingInputs);
            return Err(MatchError::MissingInputs);
        }
        (Some(r), Some(q)) => (r, q),
        (Some(r), None) => {
            default_requirement = RequirementRecord::default();
            (r, &default_requirement)
        }
        (None, Some(q)) => {
            default_resume = ResumeRecord::default();
            (&default_resume, q)
        }
    };

    Ok(scorer.score(resume, requirement))
}

// ────────────────────────────────────────────────────────────────────────────
// Dimensions
// ────────────────────────────────────────────────────────────────────────────

/// `floor(part / whole * weight)`, at least 1 when `part > 0`.
fn partial_score(part: u32, whole: u32, weight: u32) -> u32 {
    let score = (u64::from(part) * u64::from(weight) / u64::from(whole)) as u32;
    if part > 0 {
        score.max(1)
    } else {
        score
    }
}

fn percent_of(part: u32, whole: u32) -> u32 {
    ((u64::from(part) * 100 / u64::from(whole)) as u32).min(100)
}

pub fn experience_match(resume: &ResumeRecord, requirement: &RequirementRecord) -> ExperienceMatch {
    let candidate = resume.total_years_experience;
    let required = requirement.min_experience_years;

    let (met, percentage, score, details) = if required == 0 {
        (
            true,
            100,
            EXPERIENCE_WEIGHT,
            format!("No specific experience required. Candidate has {candidate} years. MATCHES."),
        )
    } else if candidate >= required {
        (
            true,
            100,
            EXPERIENCE_WEIGHT,
            format!("Candidate has {candidate} years, Required: {required} years. MATCHES."),
        )
    } else {
        let pct = percent_of(candidate, required);
        (
            false,
            pct,
            partial_score(candidate, required, EXPERIENCE_WEIGHT),
            format!("Candidate has {candidate} years, Required: {required} years. {pct}% match."),
        )
    };

    ExperienceMatch {
        met,
        candidate_experience: candidate,
        required_experience: required,
        percentage,
        score,
        details,
    }
}

pub fn education_match(resume: &ResumeRecord, requirement: &RequirementRecord) -> EducationMatch {
    let (candidate_degree, candidate_level) = education::highest_degree(&resume.education)
        .map(|(entry, level)| (entry.degree.clone(), level))
        .unwrap_or_else(|| ("not specified".to_string(), education::UNSPECIFIED));

    let required_degree = requirement.required_education.clone();
    let required_level = education::degree_level(&required_degree);

    let (met, percentage, score, details) = if required_level == education::UNSPECIFIED {
        (
            true,
            100,
            EDUCATION_WEIGHT,
            "No specific education required. MATCHES.".to_string(),
        )
    } else if candidate_level >= required_level {
        let details = if candidate_level > required_level {
            format!("Candidate is OVERQUALIFIED! Has {candidate_degree} (required: {required_degree}).")
        } else {
            format!("Candidate has {candidate_degree}, Required: {required_degree}. MATCHES.")
        };
        (true, 100, EDUCATION_WEIGHT, details)
    } else {
        let (c, r) = (u32::from(candidate_level), u32::from(required_level));
        let pct = percent_of(c, r);
        (
            false,
            pct,
            partial_score(c, r, EDUCATION_WEIGHT),
            format!("Candidate has {candidate_degree}, Required: {required_degree}. {pct}% match."),
        )
    };

    EducationMatch {
        met,
        candidate_degree,
        required_degree,
        percentage,
        score,
        is_overqualified: required_level > education::UNSPECIFIED && candidate_level > required_level,
        details,
    }
}

pub fn skills_match(
    lookup: &dyn SkillGroupLookup,
    resume: &ResumeRecord,
    requirement: &RequirementRecord,
) -> SkillsMatch {
    let candidates: Vec<String> = resume.skill_names().map(str::to_string).collect();
    let required: Vec<&str> = requirement
        .required_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if required.is_empty() {
        return SkillsMatch {
            met: true,
            candidate_skills_count: candidates.len(),
            matched_skills_count: 0,
            required_skills_count: 0,
            percentage: 100,
            score: SKILLS_WEIGHT,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            skill_match_details: Vec::new(),
            details: format!(
                "No specific skills required. Candidate has {} skills. MATCHES.",
                candidates.len()
            ),
            all_candidate_skills: candidates,
        };
    }

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    let mut skill_match_details = Vec::new();

    for req in &required {
        let result = best_match_with(lookup, req, &candidates);
        if result.is_match() {
            matched_skills.push(req.to_string());
            skill_match_details.push(result);
        } else {
            missing_skills.push(req.to_string());
        }
    }

    let (m, n) = (matched_skills.len() as u32, required.len() as u32);
    let pct = percent_of(m, n);
    let details = match pct {
        0 => format!(
            "No matching skills! Candidate has {}, Required: {n}.",
            candidates.len()
        ),
        1..=24 => format!("{m}/{n} required skills ({pct}%). Limited match."),
        25..=49 => format!("{m}/{n} required skills ({pct}%). Partial match."),
        50..=74 => format!("{m}/{n} required skills ({pct}%). Good match!"),
        _ => format!("{m}/{n} required skills ({pct}%). Excellent match!"),
    };

    SkillsMatch {
        met: pct >= SKILLS_MET_PERCENTAGE,
        candidate_skills_count: candidates.len(),
        matched_skills_count: matched_skills.len(),
        required_skills_count: required.len(),
        percentage: pct,
        score: partial_score(m, n, SKILLS_WEIGHT),
        matched_skills,
        missing_skills,
        skill_match_details,
        all_candidate_skills: candidates,
        details,
    }
}

fn summarize(met_count: usize, overall_score: u32) -> String {
    let verdict = match overall_score {
        75.. => "Strong candidate for interview.",
        60..=74 => "Good candidate to consider.",
        40..=59 => "Moderate candidate with gaps.",
        _ => "Significant improvement needed.",
    };
    format!("Matches {met_count}/3 criteria. {verdict}")
}
