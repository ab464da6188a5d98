//! Configuration
//!
//! Read from YAML. Every field is optional; a missing file means defaults.
//! Lookup order: `--config <path>`, then `<config_dir>/arbor/config.yaml`,
//! then `./config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::logic::sorting::{SortColumn, SortDirection, SortSpec};
use crate::store::DEFAULT_COPY_PREFIX;
use crate::DisplayMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at specified path: {0}")]
    Missing(String),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Invalid { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// YAML or JSON seed tree; the built-in sample when unset
    pub seed: Option<PathBuf>,
    pub history_limit: usize,
    pub vim_mode: bool,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub display_mode: DisplayMode,
    pub copy_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            vim_mode: false,
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
            display_mode: DisplayMode::default(),
            copy_prefix: DEFAULT_COPY_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str, origin: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-default config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        if config.copy_prefix.contains(crate::logic::path::SEPARATOR) {
            return Err(ConfigError::Invalid {
                path: origin.to_string(),
                reason: format!("copy_prefix {:?} contains a path separator", config.copy_prefix),
            });
        }
        Ok(config)
    }

    pub fn load(file: &Path) -> Result<Self, ConfigError> {
        let origin = file.display().to_string();
        let text = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: origin.clone(),
            source,
        })?;
        Self::from_yaml(&text, &origin)
    }

    /// Resolve the config location and load it, or fall back to defaults
    pub fn discover(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match find_config_path(cli_path)? {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort_column, self.sort_direction)
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Without one, the first existing default
/// location wins and `None` means no config file at all.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        return Err(ConfigError::Missing(path.to_string()));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("arbor").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("", "test").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_yaml(
            "vim_mode: true\nsort_column: size\nsort_direction: descending\n",
            "test",
        )
        .unwrap();
        assert!(config.vim_mode);
        assert_eq!(
            config.sort_spec(),
            SortSpec::new(SortColumn::Size, SortDirection::Descending)
        );
        assert_eq!(config.history_limit, 100);
        assert_eq!(config.copy_prefix, "Copy of ");
        assert_eq!(config.display_mode, DisplayMode::TimestampAndSize);
    }

    #[test]
    fn test_display_mode_names() {
        let config = Config::from_yaml("display_mode: timestamp_only\n", "test").unwrap();
        assert_eq!(config.display_mode, DisplayMode::TimestampOnly);
    }

    #[test]
    fn test_bad_value_reports_origin() {
        let err = Config::from_yaml("sort_column: colour\n", "my.yaml").unwrap_err();
        assert!(err.to_string().starts_with("invalid config my.yaml"));
    }

    #[test]
    fn test_copy_prefix_with_separator_rejected() {
        let err = Config::from_yaml("copy_prefix: \"backup/\"\n", "my.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_missing_cli_path_is_an_error() {
        assert!(matches!(
            find_config_path(Some("/definitely/not/here.yaml")),
            Err(ConfigError::Missing(_))
        ));
    }
}
