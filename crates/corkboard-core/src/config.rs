use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration, loaded from the platform config directory.
///
/// Everything is optional; a missing or unparsable file falls back to
/// defaults so the tool works out of the box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory for workspace documents. Defaults to
    /// `<data dir>/corkboard` when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Base URL of the template generator endpoint. When unset the hosted
    /// generator is considered unconfigured.
    #[serde(default)]
    pub template_endpoint: Option<String>,
    /// Seconds between template job status polls.
    #[serde(default)]
    pub poll_interval_secs: Option<u64>,
    /// Maximum number of status polls before giving up.
    #[serde(default)]
    pub poll_max_attempts: Option<u32>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/corkboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("corkboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("corkboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("corkboard")
        })
    }

    pub fn effective_poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs.unwrap_or(2)
    }

    pub fn effective_poll_max_attempts(&self) -> u32 {
        self.poll_max_attempts.unwrap_or(20)
    }
}
