//! Configuration management for docgen

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme the TUI starts in: "dark" or "light".
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "docgen") {
            let config_dir = proj_dirs.config_dir();
            std::fs::create_dir_all(config_dir)?;
            Ok(config_dir.join("config.toml"))
        } else {
            Ok(PathBuf::from("config.toml"))
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Backend base URL, with the `DOCGEN_BASE_URL` environment variable
    /// taking precedence over the configured value.
    pub fn base_url(&self) -> String {
        env::var("DOCGEN_BASE_URL").unwrap_or_else(|_| self.backend.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ui.theme, "dark");
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let config: Config = toml::from_str("[backend]\nbase_url = \"http://api:9000\"\n").unwrap();
        assert_eq!(config.backend.base_url, "http://api:9000");
        assert_eq!(config.ui.theme, "dark");
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.backend.base_url = "http://example:8001".to_string();
        config.ui.theme = "light".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.backend.base_url, "http://example:8001");
        assert_eq!(loaded.ui.theme, "light");
    }
}
