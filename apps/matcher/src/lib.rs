//! Resume / job-description matching core.
//!
//! Raw model output is recovered into a JSON object (`recovery`), normalized
//! into typed records (`extraction`), enriched with merged tenure
//! (`experience`) and scored against a requirement (`scoring`, using
//! `skills` for tolerant skill comparison). `batch` ranks many resumes
//! against one job description.

pub mod batch;
pub mod config;
pub mod errors;
pub mod experience;
pub mod extraction;
pub mod recovery;
pub mod scoring;
pub mod skills;

pub use errors::MatchError;
pub use extraction::{extract_record, DocumentKind, NormalizedRecord, RequirementRecord, ResumeRecord};
pub use scoring::{calculate_match, MatchReport, MatchScorer, RuleBasedScorer};
