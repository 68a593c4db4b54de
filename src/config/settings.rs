//! Builder settings
//!
//! Stored as JSON next to other per-user configuration. Environment
//! variables override the file, and everything is validated after load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

use crate::constants::autosave::{DEFAULT_DELAY_MS, MAX_DELAY_MS, MIN_DELAY_MS};
use crate::constants::config::{APP_DIR, DEFAULT_SHARE_BASE_URL, FILENAME};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Origin + path that share links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
    /// Where exported files go (current directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    860.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            autosave_delay_ms: default_autosave_delay_ms(),
            export_dir: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Load settings, creating the file with defaults on first run.
    /// A broken file is left untouched and defaults are used instead.
    pub fn load() -> Self {
        let path = Self::path();
        let mut settings = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!(path = %path.display(), "Loaded settings");
                    settings
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to parse settings file, using defaults");
                    Settings::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "Settings file not found, creating default");
                let settings = Settings::default();
                if let Err(e) = settings.save() {
                    warn!(error = ?e, "Failed to write default settings");
                }
                settings
            }
        };

        settings.apply_env_overrides();
        settings.validate_and_clamp();
        settings
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;
        fs::write(&path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("PORTFOLIO_SHARE_URL") {
            self.share_base_url = url;
        }
        if let Ok(raw) = env::var("PORTFOLIO_AUTOSAVE_MS") {
            match raw.trim().parse() {
                Ok(ms) => self.autosave_delay_ms = ms,
                Err(e) => error!(var = "PORTFOLIO_AUTOSAVE_MS", value = %raw, error = ?e, "failed to parse env var"),
            }
        }
        if let Ok(dir) = env::var("PORTFOLIO_EXPORT_DIR") {
            self.export_dir = Some(PathBuf::from(dir));
        }
    }

    fn validate_and_clamp(&mut self) {
        if Url::parse(&self.share_base_url).is_err() {
            warn!(share_base_url = %self.share_base_url, using = DEFAULT_SHARE_BASE_URL, "share_base_url is not a valid URL, using default");
            self.share_base_url = default_share_base_url();
        }

        if self.autosave_delay_ms < MIN_DELAY_MS {
            warn!(autosave_delay_ms = self.autosave_delay_ms, min = MIN_DELAY_MS, "autosave_delay_ms below minimum, clamping");
            self.autosave_delay_ms = MIN_DELAY_MS;
        } else if self.autosave_delay_ms > MAX_DELAY_MS {
            warn!(autosave_delay_ms = self.autosave_delay_ms, max = MAX_DELAY_MS, "autosave_delay_ms exceeds maximum, clamping");
            self.autosave_delay_ms = MAX_DELAY_MS;
        }

        if !(self.window_width.is_finite() && self.window_width >= 400.0) {
            self.window_width = default_window_width();
        }
        if !(self.window_height.is_finite() && self.window_height >= 300.0) {
            self.window_height = default_window_height();
        }
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    /// Parsed share base URL (validated on load)
    pub fn share_base(&self) -> Result<Url> {
        Url::parse(&self.share_base_url)
            .with_context(|| format!("Invalid share base URL {:?}", self.share_base_url))
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"autosave_delay_ms": 250}"#).unwrap();
        assert_eq!(settings.autosave_delay_ms, 250);
        assert_eq!(settings.share_base_url, DEFAULT_SHARE_BASE_URL);
        assert_eq!(settings.export_dir, None);
    }

    #[test]
    fn test_validate_clamps_delay() {
        let mut settings = Settings {
            autosave_delay_ms: 1,
            ..Settings::default()
        };
        settings.validate_and_clamp();
        assert_eq!(settings.autosave_delay_ms, MIN_DELAY_MS);

        settings.autosave_delay_ms = 60_000;
        settings.validate_and_clamp();
        assert_eq!(settings.autosave_delay_ms, MAX_DELAY_MS);
    }

    #[test]
    fn test_validate_replaces_invalid_share_url() {
        let mut settings = Settings {
            share_base_url: "not a url".to_string(),
            ..Settings::default()
        };
        settings.validate_and_clamp();
        assert_eq!(settings.share_base_url, DEFAULT_SHARE_BASE_URL);
        assert!(settings.share_base().is_ok());
    }

    #[test]
    fn test_validate_resets_tiny_window() {
        let mut settings = Settings {
            window_width: 10.0,
            window_height: f32::NAN,
            ..Settings::default()
        };
        settings.validate_and_clamp();
        assert_eq!(settings.window_width, 1200.0);
        assert_eq!(settings.window_height, 860.0);
    }

    #[test]
    fn test_export_dir_defaults_to_cwd() {
        assert_eq!(Settings::default().export_dir(), PathBuf::from("."));
    }
}
