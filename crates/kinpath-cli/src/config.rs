//! Project configuration in `.kinpath/config.json`.

use kinpath_graph::{LayoutConfig, DEFAULT_SURFACE_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_DIR: &str = ".kinpath";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings shared by every command. All fields are optional on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KinConfig {
    pub version: String,
    /// Dataset file, relative to the project root unless absolute.
    pub data: PathBuf,
    pub surface_width: f64,
    pub layout: LayoutConfig,
}

impl Default for KinConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            data: PathBuf::from("family.json"),
            surface_width: DEFAULT_SURFACE_WIDTH,
            layout: LayoutConfig::default(),
        }
    }
}

impl KinConfig {
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the config under `root`, or the defaults when there is none.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(root);
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// The dataset to load: `--data` wins, then the configured file.
    pub fn resolve_data(&self, root: &Path, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => path.to_path_buf(),
            None if self.data.is_absolute() => self.data.clone(),
            None => root.join(&self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(KinConfig::load(dir.path()).unwrap(), KinConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            KinConfig::path_in(dir.path()),
            r#"{"data": "people/tree.json", "layout": {"minGap": 40}}"#,
        )
        .unwrap();

        let config = KinConfig::load(dir.path()).unwrap();
        assert_eq!(config.data, PathBuf::from("people/tree.json"));
        assert_eq!(config.surface_width, 900.0);
        assert_eq!(config.layout.min_gap, 40.0);
        assert_eq!(config.layout.node_width, 200.0);
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        fs::write(KinConfig::path_in(dir.path()), "{ nope").unwrap();

        let err = KinConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_resolve_data() {
        let config = KinConfig::default();
        let root = Path::new("/home/me/family");

        assert_eq!(
            config.resolve_data(root, None),
            PathBuf::from("/home/me/family/family.json")
        );
        assert_eq!(
            config.resolve_data(root, Some(Path::new("other.json"))),
            PathBuf::from("other.json")
        );
    }
}
