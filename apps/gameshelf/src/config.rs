//! GameShelf configuration management.
//!
//! Configuration is stored as TOML in `gameshelf/config.toml` under
//! `$XDG_CONFIG_HOME` (default `~/.config`), or under `%APPDATA%` on
//! Windows. A missing file is created with defaults on first start.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the game library.
    #[serde(default = "default_library_path")]
    pub library_path: PathBuf,

    /// How often the UI loop checks for finished games, in milliseconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_library_path() -> PathBuf {
    data_dir().join("games.json")
}

fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: default_library_path(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl Config {
    /// Loads the configuration from the platform location.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Reads `path`, writing a default file there first if none exists.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "writing default configuration");
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }
}

/// `config.toml` under the per-user configuration directory.
fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

fn config_dir() -> PathBuf {
    if cfg!(windows) {
        return env_dir("APPDATA", "C:\\Users\\Default\\AppData").join("gameshelf");
    }
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir).join("gameshelf"),
        _ => env_dir("HOME", "/tmp").join(".config").join("gameshelf"),
    }
}

/// Per-user data directory holding the game library.
fn data_dir() -> PathBuf {
    if cfg!(windows) {
        return env_dir("APPDATA", "C:\\Users\\Default\\AppData").join("gameshelf");
    }
    match std::env::var_os("XDG_DATA_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir).join("gameshelf"),
        _ => env_dir("HOME", "/tmp").join(".local/share").join("gameshelf"),
    }
}

fn env_dir(var: &str, fallback: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.library_path.ends_with("games.json"));
        assert_eq!(config.poll_interval_ms, 100);
    }

    #[test]
    fn config_partial_toml() {
        // Only specify the interval, the library path should default.
        let config: Config = toml::from_str("poll_interval_ms = 50").unwrap();
        assert_eq!(config.poll_interval_ms, 50);
        assert!(config.library_path.to_string_lossy().contains("gameshelf"));
    }

    #[test]
    fn config_path_not_empty() {
        let path = config_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.parent().is_some_and(|p| p.ends_with("gameshelf")));
    }

    #[test]
    fn load_reads_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "library_path = \"/data/games.json\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.library_path, PathBuf::from("/data/games.json"));
        assert_eq!(loaded.poll_interval_ms, 100);
    }

    #[test]
    fn load_creates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.poll_interval_ms, 100);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.library_path, created.library_path);
    }

    #[test]
    fn saved_changes_are_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let config = Config {
            library_path: tmp.path().join("library.json"),
            poll_interval_ms: 20,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.library_path, tmp.path().join("library.json"));
        assert_eq!(loaded.poll_interval_ms, 20);
    }

    #[test]
    fn invalid_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "poll_interval_ms = \"soon\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
