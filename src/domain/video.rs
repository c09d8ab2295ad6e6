//! Video records as stored in the catalog file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One playable rendition of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoQuality {
    /// Short label, e.g. "1080p"
    pub label: String,

    /// Frame size, e.g. "1920x1080"
    pub resolution: String,

    /// Media URL for this rendition
    pub url: String,
}

impl VideoQuality {
    pub fn new(
        label: impl Into<String>,
        resolution: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            resolution: resolution.into(),
            url: url.into(),
        }
    }
}

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,

    pub title: String,

    pub description: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Primary media URL
    pub video_url: String,

    /// Display duration, "MM:SS"
    pub duration: String,

    pub views: u64,

    pub upload_date: NaiveDate,

    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Renditions, highest first
    #[serde(default)]
    pub quality: Vec<VideoQuality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl Video {
    /// Create a video with a single media URL and no tags or renditions
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        upload_date: NaiveDate,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            id: VideoId::new(id),
            title: title.into(),
            description: String::new(),
            thumbnail: String::new(),
            video_url: video_url.into(),
            duration: "00:00".to_string(),
            views: 0,
            upload_date,
            category,
            tags: Vec::new(),
            quality: Vec::new(),
            download_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_quality(mut self, quality: VideoQuality) -> Self {
        self.quality.push(quality);
        self
    }

    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// The rendition played first (the first entry)
    pub fn default_quality(&self) -> Option<&VideoQuality> {
        self.quality.first()
    }

    /// Find a rendition by its label
    pub fn quality_by_label(&self, label: &str) -> Option<&VideoQuality> {
        self.quality.iter().find(|q| q.label.eq_ignore_ascii_case(label))
    }

    /// Badge shown on the card, "HD" when there are no renditions
    pub fn quality_badge(&self) -> &str {
        self.default_quality().map(|q| q.label.as_str()).unwrap_or("HD")
    }

    /// File name offered for download, if the video is downloadable
    pub fn download_file_name(&self) -> Option<String> {
        self.download_url.as_ref().map(|_| format!("{}.mp4", self.title))
    }

    /// Tags shown on a card
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(3)]
    }
}

/// Format a view count compactly (12.3K, 1.5M)
///
/// Halves round up (1250 is "1.3K"), unlike `{:.1}` which rounds ties to even.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", one_decimal(views, 1_000_000))
    } else if views >= 1_000 {
        format!("{:.1}K", one_decimal(views, 1_000))
    } else {
        views.to_string()
    }
}

fn one_decimal(value: u64, unit: u64) -> f64 {
    (value as f64 / (unit / 10) as f64).round() / 10.0
}
