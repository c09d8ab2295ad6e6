//! Command-line interface for vidshelf.
//!
//! Provides commands for collecting the catalog (once or on a schedule)
//! and for browsing it: filtered listings, video details and the
//! category bar.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::collector::{self, ScheduleConfig};
use crate::config;
use crate::domain::{format_views, CategoryFilter, CriteriaUpdate, SortMode, Video};
use crate::library::{CatalogFile, CatalogStore};

/// vidshelf - Video catalog browser and collector
#[derive(Parser, Debug)]
#[command(name = "vidshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file (defaults to the configured catalog path)
    #[arg(long, visible_alias = "output", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the catalog once and exit (default)
    Once {
        /// Number of videos to generate
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Generate the catalog now and then every HOURS hours
    Schedule {
        /// Hours between runs (0 or a non-number means the default of 24)
        hours: Option<String>,

        /// Number of videos to generate per run
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// List videos matching a search
    List {
        /// Search text matched against title, description and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category id or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Sort order: latest, popular or views
        #[arg(short, long, default_value = "latest")]
        sort: SortMode,

        /// Maximum number of videos to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show details of a video
    Show {
        /// Video ID (a unique prefix is enough)
        video_id: String,

        /// Print only the URL of this rendition (e.g. 720p)
        #[arg(short, long)]
        quality: Option<String>,
    },

    /// Show the category bar with video counts
    Categories,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let catalog = self.catalog;

        match self.command.unwrap_or(Commands::Once { count: None }) {
            Commands::Once { count } => collect_once(catalog, count).await,
            Commands::Schedule { hours, count } => collect_scheduled(catalog, hours, count).await,
            Commands::List {
                query,
                category,
                sort,
                limit,
            } => {
                let update = CriteriaUpdate {
                    query: Some(query),
                    category: Some(category),
                    sort_by: Some(sort),
                };
                list_videos(catalog, update, limit).await
            }
            Commands::Show { video_id, quality } => {
                show_video(catalog, &video_id, quality.as_deref()).await
            }
            Commands::Categories => show_categories(catalog).await,
            Commands::Config => show_config(),
        }
    }
}

/// Catalog file from the flag, falling back to configuration
fn catalog_file(catalog: Option<PathBuf>) -> Result<CatalogFile> {
    match catalog {
        Some(path) => Ok(CatalogFile::new(path)),
        None => CatalogFile::open_default(),
    }
}

/// Exit status for a command line that failed to parse.
///
/// Help and version output succeed; every usage error is a failure (1).
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Hours between scheduled runs from the positional argument.
///
/// Leading digits are read (`"6h"` is 6); anything else uses `fallback`.
/// Zero is left for [`ScheduleConfig::new`] to replace.
fn parse_interval_hours(arg: Option<&str>, fallback: u64) -> u64 {
    let Some(arg) = arg else {
        return fallback;
    };

    let digits: String = arg
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u64>() {
        Ok(hours) => hours,
        // Too many digits to fit is still a (very long) interval
        Err(_) if !digits.is_empty() => u64::MAX,
        Err(_) => {
            tracing::warn!("Invalid interval '{}', using {} hour(s)", arg, fallback);
            fallback
        }
    }
}

/// Load the catalog file into a fresh store
async fn load_store(file: &CatalogFile) -> Result<CatalogStore> {
    let videos = file
        .load()
        .await
        .context("Failed to load catalog")?;

    let mut store = CatalogStore::new();
    store.load(videos);
    Ok(store)
}

/// Generate the catalog once
async fn collect_once(catalog: Option<PathBuf>, count: Option<usize>) -> Result<()> {
    let file = catalog_file(catalog)?;
    let count = match count {
        Some(n) => n,
        None => config::config()?.collector.count,
    };

    eprintln!("🎬 Collecting videos...");

    let report = collector::collect_once(&file, count).await?;

    print_report(&report);
    eprintln!("✨ Collection complete");

    Ok(())
}

/// Generate the catalog now and on every interval
async fn collect_scheduled(
    catalog: Option<PathBuf>,
    hours: Option<String>,
    count: Option<usize>,
) -> Result<()> {
    let file = catalog_file(catalog)?;
    let settings = &config::config()?.collector;

    let schedule = ScheduleConfig::new(
        parse_interval_hours(hours.as_deref(), settings.interval_hours),
        count.unwrap_or(settings.count),
    );

    eprintln!(
        "⏰ Scheduled collection every {} hour(s), Ctrl-C to stop",
        schedule.interval_hours
    );

    collector::run_scheduled(&file, &schedule).await
}

fn print_report(report: &collector::CollectionReport) {
    println!("✅ Collected {} videos", report.total());
    println!("💾 Saved to: {}", report.path.display());
    println!("📊 By category:");
    for (category, n) in report.category_counts() {
        println!("   {}: {} videos", category, n);
    }
}

/// Truncate to `max` characters, appending "..." when cut
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// List videos in the derived view
async fn list_videos(catalog: Option<PathBuf>, update: CriteriaUpdate, limit: usize) -> Result<()> {
    let file = catalog_file(catalog)?;
    if !file.exists() {
        println!(
            "No catalog at {}. Use 'vidshelf once' to generate one.",
            file.path().display()
        );
        return Ok(());
    }

    let mut store = load_store(&file).await?;

    if store.videos().is_empty() {
        println!("Catalog is empty. Use 'vidshelf once' to generate one.");
        return Ok(());
    }

    store.update_criteria(update);

    if store.filtered_len() == 0 {
        println!("🔍 No videos found. Try other keywords or filters.");
        return Ok(());
    }

    let criteria = store.criteria();
    println!(
        "Sort: {} | Category: {} {}",
        criteria.sort_by.label(),
        criteria.category.icon(),
        criteria.category.name()
    );
    println!();
    println!(
        "{:<26} {:<14} {:>8} {:<11} {:>6}  {:<40}  {}",
        "ID", "CATEGORY", "VIEWS", "UPLOADED", "LENGTH", "TITLE", "TAGS"
    );
    println!("{}", "-".repeat(120));

    for video in store.filtered().take(limit) {
        let tags: Vec<String> = video.card_tags().iter().map(|t| format!("#{}", t)).collect();
        println!(
            "{:<26} {:<14} {:>8} {:<11} {:>6}  {:<40}  {}",
            video.id.as_str(),
            video.category.to_string(),
            format_views(video.views),
            video.upload_date.to_string(),
            video.duration,
            truncate(&video.title, 40),
            tags.join(" ")
        );
    }

    println!(
        "\nShowing {} of {} matching ({} total)",
        store.filtered_len().min(limit),
        store.filtered_len(),
        store.videos().len()
    );

    Ok(())
}

/// Select a video and print its details, or one rendition's URL
async fn show_video(catalog: Option<PathBuf>, video_id: &str, quality: Option<&str>) -> Result<()> {
    let file = catalog_file(catalog)?;
    if !file.exists() {
        anyhow::bail!(
            "No catalog at {}. Use 'vidshelf once' to generate one.",
            file.path().display()
        );
    }

    let mut store = load_store(&file).await?;

    let id = {
        let matches = store.find_by_prefix(video_id);
        match matches.as_slice() {
            [] => anyhow::bail!("Video not found: {}", video_id),
            [video] => video.id.clone(),
            many => anyhow::bail!(
                "Video ID prefix '{}' is ambiguous ({} matches)",
                video_id,
                many.len()
            ),
        }
    };

    store.select_by_id(&id);
    let video = store
        .selected()
        .ok_or_else(|| anyhow::anyhow!("Video not found: {}", video_id))?;

    match quality {
        Some(label) => println!("{}", rendition_url(video, label)?),
        None => print_video(video),
    }
    Ok(())
}

/// URL of the rendition labelled `label` (case-insensitive)
fn rendition_url<'a>(video: &'a Video, label: &str) -> Result<&'a str> {
    match video.quality_by_label(label) {
        Some(quality) => Ok(quality.url.as_str()),
        None => {
            let available: Vec<&str> = video.quality.iter().map(|q| q.label.as_str()).collect();
            anyhow::bail!(
                "Video {} has no '{}' rendition (available: {})",
                video.id,
                label,
                available.join(", ")
            )
        }
    }
}

fn print_video(video: &Video) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("  {}", video.title);
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("  ID:        {}", video.id);
    println!("  Category:  {} {}", video.category.icon(), video.category.name());
    println!("  Duration:  {}", video.duration);
    println!("  Views:     {} ({})", format_views(video.views), video.views);
    println!("  Uploaded:  {}", video.upload_date);
    println!("  Video:     {}", video.video_url);
    println!("  Thumbnail: {}", video.thumbnail);
    if !video.tags.is_empty() {
        let tags: Vec<String> = video.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("  Tags:      {}", tags.join(" "));
    }
    println!();
    println!("  {}", video.description);
    println!();
    println!("  Quality ({} default):", video.quality_badge());
    for quality in &video.quality {
        println!("    {:<6} {:<10} {}", quality.label, quality.resolution, quality.url);
    }
    if let (Some(url), Some(name)) = (&video.download_url, video.download_file_name()) {
        println!();
        println!("  Download:  {} -> {}", url, name);
    }
}

/// Print the category bar with per-category counts
async fn show_categories(catalog: Option<PathBuf>) -> Result<()> {
    let store = load_store(&catalog_file(catalog)?).await?;

    for filter in CategoryFilter::bar() {
        let count = store
            .videos()
            .iter()
            .filter(|v| filter.accepts(v.category))
            .count();
        println!(
            "{} {:<14} {:<6} {:>4}",
            filter.icon(),
            filter.to_string(),
            filter.name(),
            count
        );
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Config file: {}", cfg.config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "(none - using defaults)".to_string()));
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!("  Catalog: {}", config::catalog_path()?.display());
    println!();
    println!("Collector:");
    println!("  Videos per run: {}", cfg.collector.count);
    println!("  Interval:       {}h", cfg.collector.interval_hours);

    Ok(())
}
