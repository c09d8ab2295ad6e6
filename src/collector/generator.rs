//! Mock video record generator.
//!
//! Draws every field from the static tables in [`super::tables`]. The
//! random source and the clock are passed in so runs can be reproduced.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Category, Video, VideoId, VideoQuality};

use super::tables::{content_for, QUALITY_LADDER, SAMPLE_VIDEOS, TAGS_PER_VIDEO, THUMBNAILS};

/// Upload dates are spread over this many days before `now`
pub const UPLOAD_WINDOW_DAYS: i64 = 30;

/// Inclusive lower bound of generated view counts
pub const MIN_VIEWS: u64 = 10_000;

/// Exclusive upper bound of generated view counts
pub const MAX_VIEWS: u64 = 510_000;

/// Generated durations span [10:00, 59:59]
const MIN_DURATION_MINUTES: u32 = 10;
const MAX_DURATION_MINUTES: u32 = 60;

/// Generates mock catalog records relative to a fixed instant
#[derive(Debug, Clone)]
pub struct MockGenerator {
    now: DateTime<Utc>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Generator anchored at the current time
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Generator anchored at `now`
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Generate one record; `index` disambiguates ids within a batch
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, index: usize) -> Video {
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let content = content_for(category);

        let video_url = pick(rng, &SAMPLE_VIDEOS).to_string();
        let title = pick(rng, content.titles).to_string();
        let thumbnail = pick(rng, &THUMBNAILS).to_string();

        let minutes = rng.gen_range(MIN_DURATION_MINUTES..MAX_DURATION_MINUTES);
        let seconds = rng.gen_range(0..60u32);

        let window_ms = Duration::days(UPLOAD_WINDOW_DAYS).num_milliseconds();
        let age = Duration::milliseconds(rng.gen_range(0..window_ms));

        Video {
            id: VideoId::new(format!("video_{}_{}", self.now.timestamp_millis(), index)),
            title,
            description: content.description.to_string(),
            thumbnail,
            video_url: video_url.clone(),
            duration: format!("{}:{:02}", minutes, seconds),
            views: rng.gen_range(MIN_VIEWS..MAX_VIEWS),
            upload_date: (self.now - age).date_naive(),
            category,
            tags: content
                .keywords
                .iter()
                .take(TAGS_PER_VIDEO)
                .map(|k| k.to_string())
                .collect(),
            quality: QUALITY_LADDER
                .iter()
                .map(|(label, resolution)| VideoQuality::new(*label, *resolution, video_url.as_str()))
                .collect(),
            download_url: Some(video_url),
        }
    }

    /// Generate `count` records with indices `0..count`
    pub fn generate_batch<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Video> {
        (0..count).map(|i| self.generate(rng, i)).collect()
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [&'static str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::collector::tables::CATEGORY_CONTENT;

    fn generator() -> MockGenerator {
        MockGenerator::at(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_generated_fields_within_ranges() {
        let gen = generator();
        let mut rng = StdRng::seed_from_u64(7);
        let earliest = (gen.now - Duration::days(UPLOAD_WINDOW_DAYS)).date_naive();

        for video in gen.generate_batch(&mut rng, 200) {
            let content = content_for(video.category);

            assert!(content.titles.contains(&video.title.as_str()));
            assert_eq!(video.description, content.description);
            assert!(SAMPLE_VIDEOS.contains(&video.video_url.as_str()));
            assert!(THUMBNAILS.contains(&video.thumbnail.as_str()));
            assert!((MIN_VIEWS..MAX_VIEWS).contains(&video.views));
            assert!(video.upload_date <= gen.now.date_naive());
            assert!(video.upload_date >= earliest);

            let (minutes, seconds) = video.duration.split_once(':').unwrap();
            let minutes: u32 = minutes.parse().unwrap();
            assert!((10..60).contains(&minutes));
            assert_eq!(seconds.len(), 2);
            assert!(seconds.parse::<u32>().unwrap() < 60);
        }
    }

    #[test]
    fn test_tags_and_qualities() {
        let mut rng = StdRng::seed_from_u64(1);
        let video = generator().generate(&mut rng, 3);

        let content = content_for(video.category);
        assert_eq!(video.tags, content.keywords[..TAGS_PER_VIDEO]);

        let labels: Vec<_> = video.quality.iter().map(|q| q.label.as_str()).collect();
        assert_eq!(labels, ["1080p", "720p", "480p"]);
        assert!(video.quality.iter().all(|q| q.url == video.video_url));
        assert_eq!(video.download_url.as_deref(), Some(video.video_url.as_str()));
    }

    #[test]
    fn test_ids_are_unique_within_batch() {
        let gen = generator();
        let mut rng = StdRng::seed_from_u64(2);
        let videos = gen.generate_batch(&mut rng, 20);

        let millis = gen.now.timestamp_millis();
        assert_eq!(videos[0].id.as_str(), format!("video_{}_0", millis));
        assert_eq!(videos[19].id.as_str(), format!("video_{}_19", millis));

        let ids: HashSet<_> = videos.iter().map(|v| v.id.clone()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_same_seed_same_output() {
        let gen = generator();
        let a = gen.generate_batch(&mut StdRng::seed_from_u64(42), 5);
        let b = gen.generate_batch(&mut StdRng::seed_from_u64(42), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_categories_reachable() {
        let gen = generator();
        let mut rng = StdRng::seed_from_u64(3);
        let videos = gen.generate_batch(&mut rng, 300);

        for content in CATEGORY_CONTENT.iter() {
            assert!(videos.iter().any(|v| v.category == content.category));
        }
    }
}
