use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::info;

use crate::extraction::extract_record;
use crate::extraction::schema::{DocumentKind, NormalizedRecord};

/// Caller-owned memo of extraction results, keyed by a digest of the schema
/// tag and the raw response.
pub struct ExtractionCache {
    entries: Mutex<LruCache<String, NormalizedRecord>>,
}

impl ExtractionCache {
    /// A zero capacity is bumped to one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn key(kind: DocumentKind, raw: &str) -> String {
        format!("{:x}", md5::compute(format!("{kind}::{raw}")))
    }

    pub fn get_or_extract(&self, raw: &str, kind: DocumentKind) -> NormalizedRecord {
        let key = Self::key(kind, raw);

        if let Ok(mut entries) = self.entries.lock() {
            if let Some(record) = entries.get(&key) {
                info!("Using cached {kind} extraction");
                return record.clone();
            }
        }

        let record = extract_record(raw, kind);

        if let Ok(mut entries) = self.entries.lock() {
            entries.put(key, record.clone());
        }
        record
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = r#"{"jobTitle": "Backend Engineer", "minExperienceYears": 4, "requiredSkills": ["Go"]}"#;

    #[test]
    fn test_key_depends_on_kind_and_text() {
        let a = ExtractionCache::key(DocumentKind::Resume, "{}");
        let b = ExtractionCache::key(DocumentKind::JobDescription, "{}");
        let c = ExtractionCache::key(DocumentKind::Resume, "{ }");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_get_or_extract_memoizes() {
        let cache = ExtractionCache::new(4);
        let first = cache.get_or_extract(JD, DocumentKind::JobDescription);
        let second = cache.get_or_extract(JD, DocumentKind::JobDescription);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        let record = first.into_requirement().unwrap();
        assert_eq!(record.job_title, "Backend Engineer");
        assert_eq!(record.min_experience_years, 4);
    }

    #[test]
    fn test_capacity_evicts_least_recent() {
        let cache = ExtractionCache::new(0);
        cache.get_or_extract("{}", DocumentKind::Resume);
        cache.get_or_extract(JD, DocumentKind::JobDescription);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
