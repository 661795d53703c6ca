// Raw model response -> typed record.
// Recovery failures never escape: they resolve to the default record.

pub mod cache;
pub mod normalize;
pub mod prompts;
pub mod schema;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::experience::{merge, tenure_of, valid_intervals};
use crate::recovery::recover_object;

pub use cache::ExtractionCache;
pub use normalize::normalize;
pub use schema::{DocumentKind, NormalizedRecord, RequirementRecord, ResumeRecord};

pub fn extract_record(raw: &str, kind: DocumentKind) -> NormalizedRecord {
    extract_record_at(raw, kind, Utc::now().date_naive())
}

/// Same as [`extract_record`] with a fixed clock for open-ended jobs.
pub fn extract_record_at(raw: &str, kind: DocumentKind, today: NaiveDate) -> NormalizedRecord {
    info!("Extracting {kind}...");

    let obj = match recover_object(raw) {
        Ok(obj) => obj,
        Err(e) => {
            warn!("Could not recover {kind} JSON ({e}); using default record");
            return NormalizedRecord::default_for(kind);
        }
    };

    match normalize(&obj, kind) {
        NormalizedRecord::Resume(mut resume) => {
            apply_tenure(&mut resume, today);
            NormalizedRecord::Resume(resume)
        }
        requirement => requirement,
    }
}

/// Recomputes total years from the entries when any of them is usable.
pub fn apply_tenure(resume: &mut ResumeRecord, today: NaiveDate) {
    let intervals = valid_intervals(&resume.experience_entries, today);
    if intervals.is_empty() {
        return;
    }

    let tenure = tenure_of(&merge(intervals));
    resume.total_years_experience = tenure.years;
    if tenure.months > 0 {
        resume.total_experience_formatted = Some(tenure.to_string());
    }
}
