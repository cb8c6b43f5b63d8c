//! Tracker configuration loaded from YAML.
//!
//! `GRAMMAR_TRACKER_CONFIG` names the file; every field is optional. A
//! missing variable means defaults, an unreadable or invalid file is logged
//! and also falls back to defaults.

use crate::error::ConfigError;
use crate::model::LevelName;
use crate::stats::LevelPolicy;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "GRAMMAR_TRACKER_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// JSON catalogue; `None` uses the embedded sample.
    pub catalogue_path: Option<PathBuf>,
    /// JSON progress file; `None` keeps progress for the session only.
    pub progress_path: Option<PathBuf>,
    pub hold_duration_ms: u64,
    pub counted_levels: Vec<LevelName>,
    pub window_title: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            progress_path: Some(PathBuf::from("grammar_progress.json")),
            hold_duration_ms: 800,
            counted_levels: LevelName::ALL
                .into_iter()
                .filter(|level| level.is_curriculum())
                .collect(),
            window_title: "Grammar Tracker".into(),
        }
    }
}

impl TrackerConfig {
    pub fn from_yaml_str(yaml: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml, path)
    }

    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
            info!("{CONFIG_ENV} not set, using default configuration");
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    pub fn policy(&self) -> LevelPolicy {
        LevelPolicy::new(self.counted_levels.iter().copied())
    }

    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config =
            TrackerConfig::from_yaml_str("hold_duration_ms: 250\n", Path::new("t.yaml")).unwrap();
        assert_eq!(config.hold_duration(), Duration::from_millis(250));
        assert_eq!(config.progress_path, TrackerConfig::default().progress_path);
        assert!(!config.policy().is_counted_level(LevelName::NonJlpt));
    }

    #[test]
    fn level_names_use_catalogue_spelling() {
        let yaml = "counted_levels: [N5, Non-JLPT, Unknown N-Level]\nprogress_path: null\n";
        let config = TrackerConfig::from_yaml_str(yaml, Path::new("t.yaml")).unwrap();
        let policy = config.policy();
        assert!(policy.is_counted_level(LevelName::NonJlpt));
        assert!(policy.is_counted_level(LevelName::Unknown));
        assert!(!policy.is_counted_level(LevelName::N4));
        assert_eq!(config.progress_path, None);
    }

    #[test]
    fn invalid_yaml_reports_the_path() {
        let err = TrackerConfig::from_yaml_str("counted_levels: [N9]", Path::new("bad.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.yaml");
        std::fs::write(&path, "window_title: Study\n").unwrap();
        assert_eq!(TrackerConfig::load(&path).unwrap().window_title, "Study");
        assert!(matches!(
            TrackerConfig::load(&dir.path().join("missing.yaml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
