//! # Configuration
//!
//! Configuration is managed by [`confique`], which layers TOML files,
//! environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SPECFILTER_OUTPUT`, `SPECFILTER_CATALOG`.
//! 2. **Project config**: `./specfilter.toml` in the working directory.
//! 3. **Global config**: `specfilter.toml` in the OS config directory (via
//!    `directories`), or in `$SPECFILTER_CONFIG_DIR` when that is set.
//! 4. **Compiled defaults**.
//!
//! Command line flags override whatever is resolved here.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `output` | `text` | Output format: `text` or `json` |
//! | `catalog` | (demo catalog) | Path to a JSON catalog file |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, SpecFilterError};

pub const CONFIG_FILE_NAME: &str = "specfilter.toml";

/// Overrides the global config directory. Used by tests to isolate global state.
pub const CONFIG_DIR_ENV: &str = "SPECFILTER_CONFIG_DIR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SpecFilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SpecFilterError::InvalidOutputFormat(s.to_string())),
        }
    }
}

// Parsed through FromStr so TOML values, env vars and defaults share one path.
impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Configuration for specfilter, stored in `specfilter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpecFilterConfig {
    /// Output format for results ("text" or "json")
    #[config(default = "text", env = "SPECFILTER_OUTPUT")]
    pub output: OutputFormat,

    /// JSON catalog to filter. When absent, the built-in demo catalog is used.
    #[config(env = "SPECFILTER_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl Default for SpecFilterConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            catalog: None,
        }
    }
}

impl SpecFilterConfig {
    /// Config files to consult for `cwd`, highest priority first.
    pub fn search_paths(cwd: &Path) -> Vec<PathBuf> {
        let mut paths = vec![cwd.join(CONFIG_FILE_NAME)];
        if let Some(dir) = Self::global_dir() {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Directory holding the global config file.
    pub fn global_dir() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => ProjectDirs::from("", "", "specfilter")
                .map(|dirs| dirs.config_dir().to_path_buf()),
        }
    }

    /// Load from the environment and the given files. Missing files are skipped.
    pub fn load_from(paths: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for path in paths {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Load using the standard search paths for `cwd`.
    pub fn load(cwd: &Path) -> Result<Self> {
        Self::load_from(&Self::search_paths(cwd))
    }

    /// Resolve a relative catalog path against `base`. An empty path counts as unset.
    pub fn catalog_path(&self, base: &Path) -> Option<PathBuf> {
        self.catalog
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| {
                if p.is_absolute() {
                    p.clone()
                } else {
                    base.join(p)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SpecFilterConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(SpecFilterError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_search_paths_start_with_cwd() {
        let cwd = Path::new("/tmp/project");
        let paths = SpecFilterConfig::search_paths(cwd);
        assert_eq!(paths[0], cwd.join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "output = \"json\"\ncatalog = \"items.json\"\n").unwrap();

        let config = SpecFilterConfig::load_from(&[path]).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.catalog, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn test_first_file_wins() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project.toml");
        let global = temp.path().join("global.toml");
        fs::write(&project, "catalog = \"project.json\"\n").unwrap();
        fs::write(&global, "output = \"json\"\ncatalog = \"global.json\"\n").unwrap();

        let config = SpecFilterConfig::load_from(&[project, global]).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("project.json")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = SpecFilterConfig::load_from(&[temp.path().join("nope.toml")]).unwrap();
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "output = \"yaml\"\n").unwrap();

        let result = SpecFilterConfig::load_from(&[path]);
        assert!(matches!(result, Err(SpecFilterError::Config(_))));
    }

    #[test]
    fn test_catalog_path_resolution() {
        let config = SpecFilterConfig {
            catalog: Some(PathBuf::from("items.json")),
            ..Default::default()
        };
        assert_eq!(
            config.catalog_path(Path::new("/work")),
            Some(PathBuf::from("/work/items.json"))
        );
        assert_eq!(SpecFilterConfig::default().catalog_path(Path::new("/work")), None);
    }

    #[test]
    fn test_empty_catalog_path_is_unset() {
        let config = SpecFilterConfig {
            catalog: Some(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(config.catalog_path(Path::new("/work")), None);
    }
}
