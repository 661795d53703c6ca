use serde::Serialize;

use crate::scoring::report::MatchReport;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub rank: usize, // 1-based
    pub candidate: String,
    pub report: MatchReport,
}

/// Orders by overall score, highest first. Equal scores keep input order.
pub fn rank_candidates(results: Vec<(String, MatchReport)>) -> Vec<RankedCandidate> {
    let mut results = results;
    results.sort_by(|(_, a), (_, b)| b.overall_score.cmp(&a.overall_score));

    results
        .into_iter()
        .enumerate()
        .map(|(i, (candidate, report))| RankedCandidate {
            rank: i + 1,
            candidate,
            report,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::schema::{RequirementRecord, ResumeRecord};
    use crate::scoring::calculate_match;

    fn report_with_score(score: u32) -> MatchReport {
        let mut report =
            calculate_match(Some(&ResumeRecord::default()), Some(&RequirementRecord::default()))
                .unwrap();
        report.overall_score = score;
        report
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let ranked = rank_candidates(vec![
            ("a.json".into(), report_with_score(40)),
            ("b.json".into(), report_with_score(90)),
            ("c.json".into(), report_with_score(65)),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| (r.rank, r.candidate.as_str())).collect();
        assert_eq!(order, vec![(1, "b.json"), (2, "c.json"), (3, "a.json")]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranked = rank_candidates(vec![
            ("first".into(), report_with_score(70)),
            ("second".into(), report_with_score(70)),
        ]);
        assert_eq!(ranked[0].candidate, "first");
        assert_eq!(ranked[1].candidate, "second");
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_candidates(Vec::new()).is_empty());
    }
}
