//! Domain types for the video catalog.
//!
//! This module contains the core data structures:
//! - Video: Catalog records and their renditions
//! - Category: The fixed category set and the `all` selection
//! - Criteria: Search text, category selection and sort mode

pub mod category;
pub mod criteria;
pub mod video;

use thiserror::Error;

// Re-export commonly used types
pub use category::{Category, CategoryFilter};
pub use criteria::{CriteriaUpdate, FilterCriteria, SortMode};
pub use video::{format_views, Video, VideoId, VideoQuality};

/// Errors from parsing user-supplied identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sort mode: {0} (expected latest, popular or views)")]
    UnknownSortMode(String),
}
