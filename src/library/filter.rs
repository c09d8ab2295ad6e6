//! Filtering and ordering of the catalog.
//!
//! The derived view is a pure function of the catalog and the criteria:
//! records are kept when they match the query and the category selection,
//! then ordered by the sort mode. Sorting is stable, so ties keep catalog
//! order.

use std::cmp::Ordering;

use crate::domain::{FilterCriteria, SortMode, Video};

/// Case-insensitive substring match against title, description or any tag
pub fn matches_query(video: &Video, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();

    video.title.to_lowercase().contains(&query_lower)
        || video.description.to_lowercase().contains(&query_lower)
        || video.tags.iter().any(|t| t.to_lowercase().contains(&query_lower))
}

/// Check a record against both predicates
pub fn matches(video: &Video, criteria: &FilterCriteria) -> bool {
    matches_query(video, &criteria.query) && criteria.category.accepts(video.category)
}

/// Comparator for a sort mode, "greater" records first
pub fn compare(sort_by: SortMode, a: &Video, b: &Video) -> Ordering {
    match sort_by {
        SortMode::Latest => b.upload_date.cmp(&a.upload_date),
        // Both rank by raw view count
        SortMode::Popular | SortMode::Views => b.views.cmp(&a.views),
    }
}

/// Produce the display-ordered subset of `videos` matching `criteria`
pub fn filter_videos<'a>(videos: &'a [Video], criteria: &FilterCriteria) -> Vec<&'a Video> {
    let mut filtered: Vec<&Video> = videos.iter().filter(|v| matches(v, criteria)).collect();
    filtered.sort_by(|a, b| compare(criteria.sort_by, a, b));
    filtered
}

/// Same as [`filter_videos`] but returns positions into `videos`
pub fn filter_indices(videos: &[Video], criteria: &FilterCriteria) -> Vec<usize> {
    let mut indices: Vec<usize> = videos
        .iter()
        .enumerate()
        .filter(|(_, v)| matches(v, criteria))
        .map(|(i, _)| i)
        .collect();
    indices.sort_by(|&a, &b| compare(criteria.sort_by, &videos[a], &videos[b]));
    indices
}
