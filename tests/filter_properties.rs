//! Filter Engine Integration Tests
//!
//! Properties of the derived view over generated and hand-written catalogs.

use chrono::{NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vidshelf::{
    filter_videos, Category, CategoryFilter, FilterCriteria, MockGenerator, SortMode, Video,
};

fn generated_catalog(seed: u64, count: usize) -> Vec<Video> {
    let generator = MockGenerator::at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    generator.generate_batch(&mut StdRng::seed_from_u64(seed), count)
}

fn all_criteria() -> Vec<FilterCriteria> {
    let mut criteria = Vec::new();
    for query in ["", "AI", "音乐", "news", "指南", "nothing-matches"] {
        for category in CategoryFilter::bar() {
            for sort_by in SortMode::ALL {
                criteria.push(
                    FilterCriteria::default()
                        .with_query(query)
                        .with_category(category)
                        .with_sort(sort_by),
                );
            }
        }
    }
    criteria
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = generated_catalog(11, 60);

    for criteria in all_criteria() {
        let once: Vec<Video> = filter_videos(&catalog, &criteria).into_iter().cloned().collect();
        let twice: Vec<Video> = filter_videos(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice, "criteria: {:?}", criteria);
    }
}

#[test]
fn test_empty_query_and_wildcard_keep_whole_catalog() {
    let catalog = generated_catalog(12, 40);

    for sort_by in SortMode::ALL {
        let criteria = FilterCriteria::default().with_sort(sort_by);
        let result = filter_videos(&catalog, &criteria);
        assert_eq!(result.len(), catalog.len());

        let mut result_ids: Vec<_> = result.iter().map(|v| v.id.as_str()).collect();
        let mut catalog_ids: Vec<_> = catalog.iter().map(|v| v.id.as_str()).collect();
        result_ids.sort_unstable();
        catalog_ids.sort_unstable();
        assert_eq!(result_ids, catalog_ids);
    }
}

#[test]
fn test_category_filter_excludes_other_categories() {
    let catalog = generated_catalog(13, 60);

    for category in Category::ALL {
        let criteria = FilterCriteria::default().with_category(category);
        let result = filter_videos(&catalog, &criteria);

        assert!(result.iter().all(|v| v.category == category));
        assert_eq!(
            result.len(),
            catalog.iter().filter(|v| v.category == category).count()
        );
    }
}

#[test]
fn test_latest_dates_non_increasing() {
    let catalog = generated_catalog(14, 60);
    let result = filter_videos(&catalog, &FilterCriteria::default().with_sort(SortMode::Latest));

    for pair in result.windows(2) {
        assert!(pair[0].upload_date >= pair[1].upload_date);
    }
}

#[test]
fn test_views_non_increasing() {
    let catalog = generated_catalog(15, 60);

    for sort_by in [SortMode::Views, SortMode::Popular] {
        let result = filter_videos(&catalog, &FilterCriteria::default().with_sort(sort_by));
        for pair in result.windows(2) {
            assert!(pair[0].views >= pair[1].views);
        }
    }
}

#[test]
fn test_query_is_case_insensitive() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let catalog = vec![Video::new("v1", "Intro to Rust", Category::Education, date, "u")];

    for query in ["rust", "RUST", "RuSt", "intro TO"] {
        let result = filter_videos(&catalog, &FilterCriteria::default().with_query(query));
        assert_eq!(result.len(), 1, "query: {}", query);
    }
}

#[test]
fn test_category_example_independent_of_sort() {
    let catalog = vec![
        Video::new(
            "music",
            "Music video",
            Category::Music,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "u",
        )
        .with_views(100),
        Video::new(
            "news",
            "News video",
            Category::News,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            "u",
        )
        .with_views(500),
    ];

    for sort_by in SortMode::ALL {
        let criteria = FilterCriteria::default()
            .with_category(Category::News)
            .with_sort(sort_by);
        let result = filter_videos(&catalog, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "news");
    }
}

#[test]
fn test_ascii_query_matches_mixed_script_title() {
    let catalog = vec![Video::new(
        "v1",
        "最新AI技术突破解析",
        Category::Technology,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        "u",
    )];

    for query in ["AI", "ai", "技术"] {
        assert_eq!(
            filter_videos(&catalog, &FilterCriteria::default().with_query(query)).len(),
            1
        );
    }
}
