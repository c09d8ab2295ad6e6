//! Catalog store: the catalog, the active criteria and the derived view.
//!
//! The derived view is recomputed from scratch with [`filter_indices`]
//! whenever the catalog or the criteria change, so it always equals
//! `filter_videos(catalog, criteria)`.

use crate::domain::{CriteriaUpdate, FilterCriteria, Video, VideoId};

use super::filter::filter_indices;

/// State container for the catalog browser
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    videos: Vec<Video>,
    criteria: FilterCriteria,
    /// Positions into `videos`, in display order
    view: Vec<usize>,
    selected: Option<Video>,
}

impl CatalogStore {
    /// Create an empty store with default criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given criteria
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Replace the catalog and recompute the derived view
    pub fn load(&mut self, videos: Vec<Video>) {
        self.videos = videos;
        self.recompute();
    }

    /// Merge a partial criteria update and recompute the derived view
    pub fn update_criteria(&mut self, update: CriteriaUpdate) {
        self.criteria.merge(update);
        self.recompute();
    }

    /// Focus a video, or clear the focus with `None`
    pub fn select_video(&mut self, video: Option<&Video>) {
        self.selected = video.cloned();
    }

    /// Focus a catalog video by id; returns false when the id is unknown
    pub fn select_by_id(&mut self, id: &VideoId) -> bool {
        match self.videos.iter().find(|v| &v.id == id) {
            Some(video) => {
                self.selected = Some(video.clone());
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&Video> {
        self.selected.as_ref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full catalog in load order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// The derived view in display order
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &Video> + '_ {
        self.view.iter().map(move |&i| &self.videos[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    /// Find catalog videos whose id starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.id.as_str().starts_with(prefix))
            .collect()
    }

    fn recompute(&mut self) {
        self.view = filter_indices(&self.videos, &self.criteria);
        tracing::debug!(
            total = self.videos.len(),
            shown = self.view.len(),
            query = %self.criteria.query,
            category = %self.criteria.category,
            sort_by = %self.criteria.sort_by,
            "Recomputed derived view"
        );
    }
}
