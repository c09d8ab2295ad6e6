//! Video categories and the category selection used by filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Fixed set of catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Entertainment,
    Education,
    Music,
    Sports,
    News,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Entertainment,
        Category::Education,
        Category::Music,
        Category::Sports,
        Category::News,
    ];

    /// Stable identifier used in the catalog file and on the command line
    pub fn id(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Music => "music",
            Category::Sports => "sports",
            Category::News => "news",
        }
    }

    /// Display name shown in the category bar
    pub fn name(self) -> &'static str {
        match self {
            Category::Technology => "科技",
            Category::Entertainment => "娱乐",
            Category::Education => "教育",
            Category::Music => "音乐",
            Category::Sports => "体育",
            Category::News => "新闻",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Technology => "💻",
            Category::Entertainment => "🎮",
            Category::Education => "📚",
            Category::Music => "🎵",
            Category::Sports => "⚽",
            Category::News => "📰",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Category selection: a single category or the `all` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Wildcard identifier
    pub const WILDCARD: &'static str = "all";

    /// Check whether a record's category passes this selection
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CategoryFilter::All => "全部",
            CategoryFilter::Only(c) => c.name(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategoryFilter::All => "🎬",
            CategoryFilter::Only(c) => c.icon(),
        }
    }

    /// The wildcard followed by every category, in category bar order
    pub fn bar() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::WILDCARD),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::WILDCARD) {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}
