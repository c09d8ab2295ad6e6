//! Filter criteria applied to the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::CategoryFilter;
use super::ParseError;

/// Display ordering of the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Upload date, newest first
    #[default]
    Latest,

    /// View count, highest first
    Popular,

    /// View count, highest first
    Views,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Latest, SortMode::Popular, SortMode::Views];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Latest => "最新",
            SortMode::Popular => "热门",
            SortMode::Views => "观看最多",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Latest => write!(f, "latest"),
            SortMode::Popular => write!(f, "popular"),
            SortMode::Views => write!(f, "views"),
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "newest" => Ok(SortMode::Latest),
            "popular" => Ok(SortMode::Popular),
            "views" => Ok(SortMode::Views),
            _ => Err(ParseError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Active search text, category selection and sort mode
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, empty matches everything
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub category: CategoryFilter,

    #[serde(default)]
    pub sort_by: SortMode,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Merge the fields present in `update` into these criteria
    pub fn merge(&mut self, update: CriteriaUpdate) {
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// Partial criteria; only the fields that are set get merged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriteriaUpdate {
    pub query: Option<String>,
    pub category: Option<CategoryFilter>,
    pub sort_by: Option<SortMode>,
}

impl CriteriaUpdate {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn category(category: impl Into<CategoryFilter>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn sort_by(sort_by: SortMode) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.category.is_none() && self.sort_by.is_none()
    }
}
