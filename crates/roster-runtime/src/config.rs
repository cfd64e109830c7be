use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROSTER_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.roster (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ROSTER_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("roster"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".roster"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout. Unset means the client waits for the connection to fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Server URL with overrides applied: explicit flag, then ROSTER_SERVER,
    /// then the config file value. Blank overrides are skipped.
    pub fn effective_base_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag
            && !url.trim().is_empty()
        {
            return url.to_string();
        }
        if let Ok(url) = std::env::var("ROSTER_SERVER")
            && !url.trim().is_empty()
        {
            return url;
        }
        self.server.base_url.clone()
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.server.base_url = url.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.timeout(), None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.set_base_url("http://hr.internal:8080");
        config.server.timeout_secs = Some(15);

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.server.timeout(), Some(Duration::from_secs(15)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[server]\ntimeout_secs = 5\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.timeout_secs, Some(5));

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[server\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_flag_wins_over_file() {
        let mut config = Config::default();
        config.set_base_url("http://from-file");
        assert_eq!(
            config.effective_base_url(Some("http://from-flag")),
            "http://from-flag"
        );
    }

    #[test]
    fn test_blank_flag_falls_through() {
        let mut config = Config::default();
        config.set_base_url("http://from-file");
        assert_eq!(
            config.effective_base_url(Some("  ")),
            config.effective_base_url(None)
        );
        assert_ne!(config.effective_base_url(Some("")), "");
    }

    #[test]
    fn test_explicit_data_dir_used_verbatim() -> Result<()> {
        let resolved = resolve_data_dir(Some("/tmp/roster-data"))?;
        assert_eq!(resolved, PathBuf::from("/tmp/roster-data"));
        Ok(())
    }
}
