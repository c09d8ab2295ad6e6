//! Catalog file on disk.
//!
//! The catalog is a plain JSON array of video records, written pretty
//! printed so it can be checked into a frontend's data directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::domain::Video;

/// Errors reading or writing the catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create catalog directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Handle to a catalog JSON file
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Catalog file at the configured location
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::config::catalog_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all records; a missing file is an empty catalog
    pub async fn load(&self) -> Result<Vec<Video>, CatalogError> {
        if !self.exists() {
            tracing::debug!("Catalog {} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;

        Self::parse(&content).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Parse catalog JSON text
    pub fn parse(content: &str) -> Result<Vec<Video>, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Write all records, creating the parent directory if needed
    pub async fn save(&self, videos: &[Video]) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| CatalogError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let content = serde_json::to_string_pretty(videos)?;
        fs::write(&self.path, content)
            .await
            .map_err(|source| CatalogError::Write {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let file = CatalogFile::new(temp.path().join("catalog.json"));

        assert!(!file.exists());
        assert!(file.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CatalogFile::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_parse_frontend_record_shape() {
        let json = r#"[{
            "id": "video_1700000000000_0",
            "title": "最新AI技术突破解析",
            "description": "深入探讨最新科技发展趋势",
            "thumbnail": "https://images.example.com/t.jpg",
            "videoUrl": "https://media.example.com/v.mp4",
            "duration": "12:05",
            "views": 123456,
            "uploadDate": "2024-05-20",
            "category": "technology",
            "tags": ["tech", "ai"],
            "quality": [
                { "label": "1080p", "resolution": "1920x1080", "url": "https://media.example.com/v.mp4" }
            ]
        }]"#;

        let videos = CatalogFile::parse(json).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].views, 123_456);
        assert_eq!(videos[0].upload_date.to_string(), "2024-05-20");
        assert!(videos[0].download_url.is_none());
    }
}
