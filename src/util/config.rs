//! Configuration file support for Gensrc.
//!
//! Gensrc supports two configuration file locations:
//! - Global: `~/.gensrc/gensrc.toml` - User-wide defaults
//! - Project: `gensrc.toml` next to the library directory
//!
//! Project config takes precedence over global config.
//!
//! The configuration's main job is carrying the known platform and profile
//! universes. Discovering those names (from build descriptor files or
//! elsewhere) happens outside this tool; the config is how the discovered
//! names are handed in when the CLI is asked to resolve every axis.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Gensrc configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Known build-axis universes
    pub axes: AxesConfig,
}

/// The known platform and profile names to iterate when resolving
/// wildcard axes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Known host platform names (e.g. "linux", "win32")
    pub platforms: Vec<String>,

    /// Known profile names (e.g. "net_4_x", "basic")
    pub profiles: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if !other.axes.platforms.is_empty() {
            self.axes.platforms = other.axes.platforms;
        }
        if !other.axes.profiles.is_empty() {
            self.axes.profiles = other.axes.profiles;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (gensrc.toml in the library directory)
/// 2. Global config (~/.gensrc/gensrc.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        if global.exists() {
            config.merge(Config::load_or_default(global));
        }
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global gensrc config path (~/.gensrc/gensrc.toml).
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".gensrc").join("gensrc.toml"))
}

/// Get the project config path (gensrc.toml inside the library directory).
pub fn project_config_path(library_dir: &Path) -> PathBuf {
    library_dir.join("gensrc.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.axes.platforms.is_empty());
        assert!(config.axes.profiles.is_empty());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("gensrc.toml");

        std::fs::write(
            &config_path,
            r#"
[axes]
platforms = ["linux", "win32"]
profiles = ["net_4_x"]
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.axes.platforms, vec!["linux", "win32"]);
        assert_eq!(config.axes.profiles, vec!["net_4_x"]);
    }

    #[test]
    fn test_config_merge_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("gensrc.toml");

        std::fs::write(
            &global_path,
            "[axes]\nplatforms = [\"linux\"]\nprofiles = [\"net_4_x\", \"basic\"]\n",
        )
        .unwrap();
        std::fs::write(&project_path, "[axes]\nplatforms = [\"win32\"]\n").unwrap();

        let config = load_config(Some(&global_path), &project_path);

        // Project platforms override global; global profiles survive
        assert_eq!(config.axes.platforms, vec!["win32"]);
        assert_eq!(config.axes.profiles, vec!["net_4_x", "basic"]);
    }

    #[test]
    fn test_config_load_or_default_missing() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(&tmp.path().join("absent.toml"));
        assert!(config.axes.platforms.is_empty());
    }
}
