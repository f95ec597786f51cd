use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

pub const DEFAULT_COUNTRY_CODE: &str = "IN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GEOCODING_BASE_URL: &str = "http://api.openweathermap.org";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Settings read from the optional config file, with the API key
/// overridable from the environment.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// country_code = "IN"
/// request_timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    /// Country filter appended to every geocoding query.
    pub country_code: String,
    pub request_timeout_secs: u64,
    pub geocoding_base_url: String,
    pub weather_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load the config file (if any), then apply `WEATHER_API_KEY` from the environment.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(cfg)
    }

    /// Load config from `path`, or return defaults if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-gui")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// A non-empty environment value replaces whatever the file provided.
    pub fn apply_env_api_key(&mut self, value: Option<String>) {
        if let Some(key) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Returns the API key, if present and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_provider_settings() {
        let cfg = Config::default();

        assert_eq!(cfg.api_key(), None);
        assert_eq!(cfg.country_code, "IN");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.geocoding_base_url, "http://api.openweathermap.org");
        assert_eq!(cfg.weather_base_url, "https://api.openweathermap.org");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let cfg = Config::from_toml("country_code = \"GB\"\n").expect("valid toml");

        assert_eq!(cfg.country_code, "GB");
        assert_eq!(cfg.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.api_key(), None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = Config::from_toml("request_timeout_secs = \"soon\"").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("weather-gui-test-does-not-exist/config.toml");
        let cfg = Config::load_from(&path).expect("defaults");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut cfg = Config::from_toml("api_key = \"FILE_KEY\"").expect("valid toml");
        assert_eq!(cfg.api_key(), Some("FILE_KEY"));

        cfg.apply_env_api_key(Some("ENV_KEY".into()));
        assert_eq!(cfg.api_key(), Some("ENV_KEY"));
    }

    #[test]
    fn blank_env_key_does_not_clear_file_key() {
        let mut cfg = Config::from_toml("api_key = \"FILE_KEY\"").expect("valid toml");

        cfg.apply_env_api_key(Some("   ".into()));
        cfg.apply_env_api_key(None);

        assert_eq!(cfg.api_key(), Some("FILE_KEY"));
    }

    #[test]
    fn blank_file_key_counts_as_missing() {
        let cfg = Config::from_toml("api_key = \"\"").expect("valid toml");
        assert_eq!(cfg.api_key(), None);
    }
}
