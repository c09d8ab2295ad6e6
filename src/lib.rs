//! vidshelf - Video catalog browser
//!
//! A catalog of videos with search, category and sort filtering, backed
//! by a static JSON catalog and a mock-data collector that produces it.
//!
//! # Architecture
//!
//! The browsing side is a small state container over a pure function:
//! - The catalog is loaded once from a JSON file
//! - The derived view is `filter_videos(catalog, criteria)`, recomputed on
//!   every catalog or criteria change
//! - The selected video is tracked separately from the view
//!
//! # Modules
//!
//! - `domain`: Data structures (Video, Category, FilterCriteria)
//! - `library`: Catalog file, filter engine and store
//! - `collector`: Mock catalog generation, once or on a schedule
//! - `config`: Path and collector settings
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Generate the catalog
//! vidshelf once --count 20
//!
//! # Regenerate every 6 hours
//! vidshelf schedule 6
//!
//! # Browse
//! vidshelf list --query AI --category technology --sort views
//! vidshelf show video_1700000000000_3
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use collector::{CollectionReport, MockGenerator};
pub use domain::{
    Category, CategoryFilter, CriteriaUpdate, FilterCriteria, SortMode, Video, VideoId, VideoQuality,
};
pub use library::{filter_videos, CatalogError, CatalogFile, CatalogStore};
