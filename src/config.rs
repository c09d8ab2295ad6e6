//! Configuration for vidshelf paths and collection defaults.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (VIDSHELF_HOME, VIDSHELF_CATALOG)
//! 2. Config file (.vidshelf/config.yaml)
//! 3. Defaults (~/.vidshelf, 20 videos per run, every 24 hours)
//!
//! Config file discovery:
//! - Searches current directory and parents for .vidshelf/config.yaml
//! - `home` is relative to the .vidshelf/ directory, `catalog` to the
//!   project root (the directory holding .vidshelf/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::collector::{DEFAULT_INTERVAL_HOURS, DEFAULT_VIDEO_COUNT};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const CONFIG_DIR: &str = ".vidshelf";
const CONFIG_FILE: &str = "config.yaml";
const ENV_HOME: &str = "VIDSHELF_HOME";
const ENV_CATALOG: &str = "VIDSHELF_CATALOG";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub collector: Option<CollectorConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .vidshelf/)
    pub home: Option<String>,
    /// Catalog JSON file (relative to the project root)
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    pub count: Option<usize>,
    pub interval_hours: Option<u64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// State directory
    pub home: PathBuf,
    /// Catalog JSON file
    pub catalog: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Collection defaults
    pub collector: CollectorSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorSettings {
    pub count: usize,
    pub interval_hours: u64,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_VIDEO_COUNT,
            interval_hours: DEFAULT_INTERVAL_HOURS,
        }
    }
}

impl CollectorSettings {
    fn from_file(config: Option<&CollectorConfig>) -> Self {
        let defaults = Self::default();
        Self {
            count: config.and_then(|c| c.count).unwrap_or(defaults.count),
            interval_hours: config
                .and_then(|c| c.interval_hours)
                .filter(|h| *h > 0)
                .unwrap_or(defaults.interval_hours),
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Environment overrides, read once per resolution
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    home: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            home: std::env::var(ENV_HOME).ok().map(PathBuf::from),
            catalog: std::env::var(ENV_CATALOG).ok().map(PathBuf::from),
        }
    }
}

/// Resolve configuration from an optional config file and overrides
fn resolve(
    config_file: Option<PathBuf>,
    env: EnvOverrides,
    default_home: PathBuf,
) -> Result<ResolvedConfig> {
    let (home, catalog, collector) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        let vidshelf_dir = config_path.parent().unwrap_or(Path::new("."));
        let project_root = vidshelf_dir.parent().unwrap_or(Path::new("."));

        let home = if let Some(env_home) = env.home {
            env_home
        } else if let Some(ref home_path) = config.paths.home {
            resolve_path(vidshelf_dir, home_path)
        } else {
            default_home
        };

        let catalog = if let Some(env_catalog) = env.catalog {
            env_catalog
        } else if let Some(ref catalog_path) = config.paths.catalog {
            resolve_path(project_root, catalog_path)
        } else {
            home.join("catalog.json")
        };

        let collector = CollectorSettings::from_file(config.collector.as_ref());

        (home, catalog, collector)
    } else {
        let home = env.home.unwrap_or(default_home);
        let catalog = env.catalog.unwrap_or_else(|| home.join("catalog.json"));

        (home, catalog, CollectorSettings::default())
    };

    Ok(ResolvedConfig {
        home,
        catalog,
        config_file,
        collector,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    let config_file = std::env::current_dir()
        .ok()
        .and_then(|dir| find_config_file(&dir));

    resolve(config_file, EnvOverrides::from_env(), default_home)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the catalog file path
pub fn catalog_path() -> Result<PathBuf> {
    Ok(config()?.catalog.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, yaml: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", yaml).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, EnvOverrides::default(), PathBuf::from("/home/me/.vidshelf"))
            .unwrap();

        assert_eq!(config.home, PathBuf::from("/home/me/.vidshelf"));
        assert_eq!(config.catalog, PathBuf::from("/home/me/.vidshelf/catalog.json"));
        assert_eq!(config.collector, CollectorSettings::default());
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1.0"
paths:
  home: ./state
  catalog: src/data/collectedVideos.json
collector:
  count: 50
  interval_hours: 6
"#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.home, Some("./state".to_string()));
        assert_eq!(config.collector.unwrap().count, Some(50));
    }

    #[test]
    fn test_resolve_relative_to_project_root() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1.0"
paths:
  catalog: data/catalog.json
collector:
  interval_hours: 0
"#,
        );

        let config = resolve(Some(path), EnvOverrides::default(), PathBuf::from("/unused"))
            .unwrap();

        assert_eq!(config.home, PathBuf::from("/unused"));
        assert_eq!(config.catalog, temp.path().join("data/catalog.json"));
        // zero interval falls back to the default
        assert_eq!(config.collector.interval_hours, DEFAULT_INTERVAL_HOURS);
        assert_eq!(config.collector.count, DEFAULT_VIDEO_COUNT);
    }

    #[test]
    fn test_env_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1.0"
paths:
  catalog: data/catalog.json
"#,
        );

        let env = EnvOverrides {
            home: Some(PathBuf::from("/env/home")),
            catalog: Some(PathBuf::from("/env/catalog.json")),
        };
        let config = resolve(Some(path), env, PathBuf::from("/unused")).unwrap();

        assert_eq!(config.home, PathBuf::from("/env/home"));
        assert_eq!(config.catalog, PathBuf::from("/env/catalog.json"));
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "version: \"1.0\"");
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file(&nested), Some(path));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let base = PathBuf::from("/home/user/project");
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
