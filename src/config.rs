use crate::services::deal_context::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variables checked for the text-generation key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key for the text-generation service; fallback copy is used without it
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    /// Hotline shown in the header and on the lead step
    pub hotline: String,
    pub analysis_tick_ms: u64,
    pub ticker_refresh_ms: u64,
    pub notifications_enabled: bool,
    /// Event polling timeout of the main loop
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            hotline: "(800) 575-4609".to_string(),
            analysis_tick_ms: 30,
            ticker_refresh_ms: 2000,
            notifications_enabled: true,
            tick_rate_ms: 50,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".flightfare-tui"))
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an
    /// error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Ok(Config::default()),
        };
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Save the config to `path`, or the default location
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(Self::default_path)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        Ok(path)
    }

    /// Override the API key from the environment when a variable is set.
    ///
    /// `GEMINI_API_KEY` wins over `API_KEY`, and both win over the file.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| env::var(name).ok());
    }

    fn apply_env_with<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key);
        }
    }

    pub fn analysis_tick(&self) -> Duration {
        Duration::from_millis(self.analysis_tick_ms.max(1))
    }

    pub fn ticker_refresh(&self) -> Duration {
        Duration::from_millis(self.ticker_refresh_ms.max(100))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(10, 1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{ "hotline": "(800) 000-0000" }"#).unwrap();
        assert_eq!(config.hotline, "(800) 000-0000");
        assert_eq!(config.analysis_tick_ms, 30);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(Config::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("flightfare-tui-does-not-exist.json");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("flightfare-tui-config-{}", std::process::id()))
            .join("config.json");
        let config = Config {
            notifications_enabled: false,
            ..Config::default()
        };
        config.save(Some(&path)).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_env_key_precedence() {
        let vars: HashMap<&str, &str> =
            [("GEMINI_API_KEY", "gemini"), ("API_KEY", "generic")].into();
        let mut config = Config {
            api_key: Some("file".to_string()),
            ..Config::default()
        };
        config.apply_env_with(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let mut config = Config {
            api_key: Some("file".to_string()),
            ..Config::default()
        };
        config.apply_env_with(|name| (name == "GEMINI_API_KEY").then(|| " ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("file"));
    }

    #[test]
    fn test_durations_are_clamped() {
        let config = Config {
            analysis_tick_ms: 0,
            tick_rate_ms: 5000,
            ..Config::default()
        };
        assert_eq!(config.analysis_tick(), Duration::from_millis(1));
        assert_eq!(config.tick_rate(), Duration::from_millis(1000));
    }
}
