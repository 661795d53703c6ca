//! Batch driver: one job description against a directory of resume responses.
//!
//! Extraction and scoring are CPU-bound, so each resume runs inside
//! `tokio::task::spawn_blocking`. Ranking happens once every task has
//! finished.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::MatchError;
use crate::extraction::{DocumentKind, ExtractionCache, RequirementRecord};
use crate::scoring::{rank_candidates, MatchScorer, RankedCandidate};

/// One raw model response read from disk.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub job_title: String,
    pub scorer_backend: String,
    pub total_candidates: usize,
    pub candidates: Vec<RankedCandidate>,
}

/// Reads every regular, non-hidden file in `dir`, sorted by file name.
pub async fn load_documents(dir: &Path) -> Result<Vec<RawDocument>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read resume directory {}", dir.display()))?;

    let mut documents = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.file_type().await?.is_file() {
            continue;
        }
        let text = tokio::fs::read_to_string(entry.path())
            .await
            .with_context(|| format!("Failed to read {name}"))?;
        documents.push(RawDocument { name, text });
    }

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    info!("Loaded {} resume responses from {}", documents.len(), dir.display());
    Ok(documents)
}

pub async fn extract_requirement(
    path: &Path,
    cache: &ExtractionCache,
) -> Result<RequirementRecord> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read job description {}", path.display()))?;

    let record = cache
        .get_or_extract(&raw, DocumentKind::JobDescription)
        .into_requirement()
        .unwrap_or_default();
    Ok(record)
}

/// Extracts and scores every resume against `requirement`, then ranks.
pub async fn run_batch(
    requirement: RequirementRecord,
    resumes: Vec<RawDocument>,
    cache: Arc<ExtractionCache>,
    scorer: Arc<dyn MatchScorer>,
) -> Result<BatchReport> {
    let requirement = Arc::new(requirement);
    let total = resumes.len();

    let handles: Vec<_> = resumes
        .into_iter()
        .map(|doc| {
            let requirement = Arc::clone(&requirement);
            let cache = Arc::clone(&cache);
            let scorer = Arc::clone(&scorer);
            tokio::task::spawn_blocking(move || {
                let resume = cache
                    .get_or_extract(&doc.text, DocumentKind::Resume)
                    .into_resume()
                    .unwrap_or_default();
                let report = scorer.score(&resume, &requirement);
                (doc.name, report)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(total);
    for handle in handles {
        let (name, report) = handle
            .await
            .context("spawn_blocking failed while scoring a resume")?;
        if report.overall_score == 0 {
            warn!("{name}: no criteria matched");
        }
        results.push((name, report));
    }

    let candidates = rank_candidates(results);
    if let Some(top) = candidates.first() {
        info!(
            "Ranked {total} candidates; top: {} ({}/100)",
            top.candidate, top.report.overall_score
        );
    }

    Ok(BatchReport {
        job_title: requirement.job_title.clone(),
        scorer_backend: scorer.backend().to_string(),
        total_candidates: total,
        candidates,
    })
}

pub fn render_report(report: &BatchReport) -> Result<String, MatchError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub async fn write_report(report: &BatchReport, path: &Path) -> Result<(), MatchError> {
    let json = render_report(report)?;
    tokio::fs::write(path, json).await?;
    info!("Wrote ranking to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RuleBasedScorer;

    const JD: &str = r#"Sure! Here is the JSON:
```json
{"jobTitle": "Backend Engineer", "minExperienceYears": 3, "requiredEducation": "Bachelor",
 "requiredSkills": ["Rust", "PostgreSQL", "Docker", "Kafka"]}
```"#;

    const STRONG: &str = r#"{"role": "Senior Engineer", "totalYearsExperience": 6,
        "skills": ["Rust", "Postgres", "Docker", "Kafka"],
        "education": [{"degree": "B.Tech", "field": "CS", "year": 2015}]}"#;

    const WEAK: &str = r#"{"role": "Intern", "totalYearsExperience": 0, "skills": ["Excel"], "education": []"#;

    fn scorer() -> Arc<dyn MatchScorer> {
        Arc::new(RuleBasedScorer::default())
    }

    #[tokio::test]
    async fn test_load_documents_sorted_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), WEAK).unwrap();
        std::fs::write(dir.path().join("a.txt"), STRONG).unwrap();
        std::fs::write(dir.path().join(".DS_Store"), "junk").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let docs = load_documents(dir.path()).await.unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_load_documents_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_documents(&dir.path().join("absent")).await.is_err());
    }

    #[tokio::test]
    async fn test_batch_ranks_strong_candidate_first() {
        let dir = tempfile::tempdir().unwrap();
        let jd_path = dir.path().join("jd.txt");
        std::fs::write(&jd_path, JD).unwrap();

        let cache = Arc::new(ExtractionCache::new(16));
        let requirement = extract_requirement(&jd_path, &cache).await.unwrap();
        assert_eq!(requirement.job_title, "Backend Engineer");

        let resumes = vec![
            RawDocument { name: "weak".into(), text: WEAK.into() },
            RawDocument { name: "strong".into(), text: STRONG.into() },
        ];
        let report = run_batch(requirement, resumes, Arc::clone(&cache), scorer())
            .await
            .unwrap();

        assert_eq!(report.total_candidates, 2);
        assert_eq!(report.scorer_backend, "rule_based");
        assert_eq!(report.candidates[0].candidate, "strong");
        assert_eq!(report.candidates[0].rank, 1);
        assert_eq!(report.candidates[0].report.overall_score, 100);
        assert_eq!(report.candidates[1].candidate, "weak");
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_write_report_round_trips_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.json");
        let resumes = vec![RawDocument { name: "strong".into(), text: STRONG.into() }];
        let report = run_batch(RequirementRecord::default(), resumes, Arc::new(ExtractionCache::new(4)), scorer())
            .await
            .unwrap();

        write_report(&report, &path).await.unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["jobTitle"], "Not extracted");
        assert_eq!(written["candidates"][0]["rank"], 1);
        assert_eq!(written["candidates"][0]["report"]["overallScore"], 100);
        assert_eq!(written["candidates"][0]["report"]["assessment"], "excellent");
    }

    #[tokio::test]
    async fn test_write_report_to_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_batch(RequirementRecord::default(), Vec::new(), Arc::new(ExtractionCache::new(1)), scorer())
            .await
            .unwrap();
        let err = write_report(&report, &dir.path().join("no/such/file.json")).await.unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
    }

    #[tokio::test]
    async fn test_batch_with_no_resumes() {
        let report = run_batch(
            RequirementRecord::default(),
            Vec::new(),
            Arc::new(ExtractionCache::new(4)),
            scorer(),
        )
        .await
        .unwrap();
        assert!(report.candidates.is_empty());
        assert_eq!(report.job_title, "Not extracted");
    }
}
