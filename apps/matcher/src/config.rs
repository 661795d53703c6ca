use std::path::PathBuf;

use anyhow::{Context, Result};

/// Batch driver configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of raw model responses, one resume per file.
    pub resume_dir: PathBuf,
    /// Raw model response for the job description.
    pub job_description_path: PathBuf,
    /// Ranked JSON goes to stdout when unset.
    pub output_path: Option<PathBuf>,
    pub cache_capacity: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            resume_dir: require(&lookup, "RESUME_DIR")?.into(),
            job_description_path: require(&lookup, "JOB_DESCRIPTION_PATH")?.into(),
            output_path: lookup("OUTPUT_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cache_capacity: lookup("CACHE_CAPACITY")
                .unwrap_or_else(|| "256".to_string())
                .parse::<usize>()
                .context("CACHE_CAPACITY must be a non-negative integer")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_DIR", "data/resumes"),
            ("JOB_DESCRIPTION_PATH", "data/jd.txt"),
        ]))
        .unwrap();
        assert_eq!(config.resume_dir, PathBuf::from("data/resumes"));
        assert_eq!(config.output_path, None);
        assert_eq!(config.cache_capacity, 256);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_required_var_is_named() {
        let err = Config::from_lookup(lookup_from(&[("RESUME_DIR", "x")])).unwrap_err();
        assert!(err.to_string().contains("JOB_DESCRIPTION_PATH"));
    }

    #[test]
    fn test_invalid_capacity_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("RESUME_DIR", "x"),
            ("JOB_DESCRIPTION_PATH", "y"),
            ("CACHE_CAPACITY", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("CACHE_CAPACITY"));
    }
}
