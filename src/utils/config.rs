//! Configuration management for directplay
//!
//! This module handles loading and managing client configuration
//! from config files and environment variables.

use crate::utils::error::{DirectPlayError, IntoPlayerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Device profile settings
    pub profile: ProfileConfig,

    /// Playback settings
    pub playback: PlaybackConfig,

    /// General settings
    pub general: GeneralConfig,
}

/// Device profile configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Profile name sent to the server
    pub name: String,

    /// Streaming bitrate cap in bits per second
    pub max_streaming_bitrate: u64,
}

/// Playback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Let the server pick the bitrate
    pub automatic_quality: bool,

    /// Offer "Auto" in the quality menu
    pub include_auto_quality: bool,

    /// Apply the server's default subtitle on start
    pub subtitles_enabled: bool,
}

/// General configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "directplay".to_string(),
            max_streaming_bitrate: 120_000_000,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            automatic_quality: true,
            include_auto_quality: true,
            subtitles_enabled: true,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/directplay/config.toml on Linux)
    /// 3. User config file (~/.config/directplay/config.toml on Linux)
    /// 4. Environment variables (DIRECTPLAY_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config.merge_from_file(&system_path)?;
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load defaults overlaid with one explicit file, then the environment
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge_from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration from a TOML file
    ///
    /// Keys present in the file replace the current values; absent keys
    /// keep them.
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;
        let overlay: toml::Table = toml::from_str(&contents).config_err("Failed to parse config file")?;

        let toml::Value::Table(mut merged) = toml::Value::try_from(&*self).config_err("Failed to serialize config")? else {
            return Err(DirectPlayError::Config("Config did not serialize to a table".to_string()));
        };
        merge_tables(&mut merged, overlay);

        *self = toml::Value::Table(merged).try_into::<Config>().config_err("Invalid config file")?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(name) = std::env::var("DIRECTPLAY_PROFILE_NAME") {
            self.profile.name = name;
        }

        if let Ok(bitrate) = std::env::var("DIRECTPLAY_MAX_STREAMING_BITRATE") {
            self.profile.max_streaming_bitrate = bitrate
                .parse()
                .map_err(|_| DirectPlayError::Config("Invalid DIRECTPLAY_MAX_STREAMING_BITRATE".to_string()))?;
        }

        if let Ok(automatic) = std::env::var("DIRECTPLAY_AUTOMATIC_QUALITY") {
            self.playback.automatic_quality = automatic
                .parse()
                .map_err(|_| DirectPlayError::Config("Invalid DIRECTPLAY_AUTOMATIC_QUALITY".to_string()))?;
        }

        if let Ok(enabled) = std::env::var("DIRECTPLAY_SUBTITLES_ENABLED") {
            self.playback.subtitles_enabled = enabled
                .parse()
                .map_err(|_| DirectPlayError::Config("Invalid DIRECTPLAY_SUBTITLES_ENABLED".to_string()))?;
        }

        if let Ok(log_level) = std::env::var("DIRECTPLAY_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(DirectPlayError::Config("Profile name must not be empty".to_string()));
        }

        if self.profile.max_streaming_bitrate == 0 {
            return Err(DirectPlayError::Config("Max streaming bitrate must be non-zero".to_string()));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(DirectPlayError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/directplay/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("DirectPlay").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from("/Library/Application Support/DirectPlay/config.toml"));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return dirs::config_dir().map(|p| p.join("directplay").join("config.toml"));

        #[cfg(any(target_os = "windows", target_os = "macos"))]
        return dirs::config_dir().map(|p| p.join("DirectPlay").join("config.toml"));

        #[allow(unreachable_code)]
        None
    }
}

/// Recursively overlay `overlay` onto `base`
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => merge_tables(existing, nested),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
