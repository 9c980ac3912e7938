//! Evaluation settings persisted as TOML inside the app directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::dataset::split::SplitOptions;
use crate::ml::evaluate::DEFAULT_CLASS_COUNT;
use crate::ml::ndcg::DEFAULT_RANK;
use crate::ml::ranking::TieBreak;

/// Config file name inside the `.destrank` root.
pub const CONFIG_FILE_NAME: &str = "destrank.toml";

/// Column holding the destination label in raw tables.
pub const DEFAULT_TARGET_COLUMN: &str = "country_destination";

/// Errors that may occur while loading or saving evaluation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error("Unable to resolve config directory: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
}

/// Settings shared by the splitter and the evaluation helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Ranking cut-off for nDCG.
    pub rank: usize,
    /// Number of per-class slots reported, independent of the classes seen.
    pub class_count: usize,
    pub tie_break: TieBreak,
    /// Table column holding the class label.
    pub target_column: String,
    pub split: SplitOptions,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            rank: DEFAULT_RANK,
            class_count: DEFAULT_CLASS_COUNT,
            tie_break: TieBreak::default(),
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            split: SplitOptions::default(),
        }
    }
}

impl EvalConfig {
    /// Clamp values that would make evaluation meaningless.
    pub fn normalized(mut self) -> Self {
        self.class_count = self.class_count.max(1);
        if !(self.split.test_fraction > 0.0 && self.split.test_fraction < 1.0) {
            self.split.test_fraction = SplitOptions::default().test_fraction;
        }
        if self.target_column.trim().is_empty() {
            self.target_column = DEFAULT_TARGET_COLUMN.to_string();
        }
        self
    }

    /// Load settings from a TOML file, returning defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Self>(&text)
            .map(Self::normalized)
            .map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load settings from the default config path.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Write settings to a TOML file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|source| ConfigError::SerializeToml {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = EvalConfig::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, EvalConfig::default());
        assert_eq!(config.rank, 5);
        assert_eq!(config.class_count, 12);
        assert_eq!(config.split.seed, 42);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "rank = 3\ntie_break = \"higher_index_first\"\n\n[split]\ntest_fraction = 0.25\n",
        )
        .unwrap();
        let config = EvalConfig::load_from(&path).unwrap();
        assert_eq!(config.rank, 3);
        assert_eq!(config.tie_break, TieBreak::HigherIndexFirst);
        assert_eq!(config.split.test_fraction, 0.25);
        assert_eq!(config.split.seed, 42);
        assert_eq!(config.target_column, DEFAULT_TARGET_COLUMN);
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "class_count = 0\n[split]\ntest_fraction = 1.5\n").unwrap();
        let config = EvalConfig::load_from(&path).unwrap();
        assert_eq!(config.class_count, 1);
        assert_eq!(config.split.test_fraction, 0.2);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "rank = \"five\"").unwrap();
        let err = EvalConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { path: p, .. } if p == path));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = EvalConfig {
            rank: 10,
            tie_break: TieBreak::HigherIndexFirst,
            ..EvalConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(EvalConfig::load_from(&path).unwrap(), config);
    }
}
