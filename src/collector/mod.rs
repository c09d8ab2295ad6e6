//! Catalog collection.
//!
//! Produces the catalog file consumed by the browser. There is no live
//! video source: each run generates mock records from static tables.
//!
//! ```text
//! MockGenerator ──> Vec<Video> ──> CatalogFile::save ──> catalog.json
//!                                        │
//!                                 CollectionReport (per-category counts)
//! ```

pub mod generator;
pub mod schedule;
pub mod tables;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::{Category, Video};
use crate::library::CatalogFile;

pub use generator::MockGenerator;
pub use schedule::{run_scheduled, ScheduleConfig, DEFAULT_INTERVAL_HOURS};

/// Default number of records generated per run
pub const DEFAULT_VIDEO_COUNT: usize = 20;

/// Outcome of a single collection run
#[derive(Debug, Clone)]
pub struct CollectionReport {
    /// Where the catalog was written
    pub path: PathBuf,

    /// The records that were written
    pub videos: Vec<Video>,
}

impl CollectionReport {
    pub fn total(&self) -> usize {
        self.videos.len()
    }

    /// Record count per category, in category order, omitting empty ones
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.videos.iter().filter(|v| v.category == c).count()))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// Generate `count` fresh records and write them to `file`
pub async fn collect_once(file: &CatalogFile, count: usize) -> Result<CollectionReport> {
    tracing::info!("Collecting {} videos", count);

    // ThreadRng is !Send, so it must not live across the await below
    let videos = {
        let mut rng = rand::thread_rng();
        MockGenerator::new().generate_batch(&mut rng, count)
    };

    save_collection(file, videos).await
}

/// Write already generated records to `file` and log the summary
pub async fn save_collection(file: &CatalogFile, videos: Vec<Video>) -> Result<CollectionReport> {
    file.save(&videos)
        .await
        .with_context(|| format!("Failed to save collected videos to {}", file.path().display()))?;

    let report = CollectionReport {
        path: file.path().to_path_buf(),
        videos,
    };

    tracing::info!(
        "Collected {} videos, saved to {}",
        report.total(),
        report.path.display()
    );
    for (category, n) in report.category_counts() {
        tracing::info!("  {}: {} videos", category, n);
    }

    Ok(report)
}
