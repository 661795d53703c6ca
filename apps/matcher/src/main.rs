use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::batch::{extract_requirement, load_documents, render_report, run_batch, write_report};
use matcher::config::Config;
use matcher::extraction::ExtractionCache;
use matcher::scoring::{MatchScorer, RuleBasedScorer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let cache = Arc::new(ExtractionCache::new(config.cache_capacity));
    info!("Extraction cache initialized (capacity: {})", config.cache_capacity);

    // RuleBasedScorer by default; any MatchScorer can be swapped in here
    let scorer: Arc<dyn MatchScorer> = Arc::new(RuleBasedScorer::default());

    let requirement = extract_requirement(&config.job_description_path, &cache).await?;
    info!(
        "Job description: {} ({} required skills)",
        requirement.job_title,
        requirement.required_skills.len()
    );

    let resumes = load_documents(&config.resume_dir).await?;
    let report = run_batch(requirement, resumes, cache, scorer).await?;

    match &config.output_path {
        Some(path) => write_report(&report, path)
            .await
            .with_context(|| format!("Failed to write ranking to {}", path.display()))?,
        None => println!("{}", render_report(&report)?),
    }

    Ok(())
}
