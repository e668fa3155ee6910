//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::clock::{PollInterval, DEFAULT_POLL_INTERVAL_MS};
use crate::error::{ProbeError, ProbeResult};

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// How the fullscreen query behaves when the window server can't be read.
    pub query: QueryConfig,

    /// Polling parameters for `watch`.
    pub watch: WatchConfig,

    /// Overlay show/hide parameters.
    pub overlay: OverlayConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// What to report when the desktop state cannot be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Report "not fullscreen".
    #[default]
    AssumeWindowed,
    /// Report "fullscreen".
    AssumeFullscreen,
}

impl FallbackPolicy {
    /// The value reported in place of a failed read.
    pub fn fallback_value(self) -> bool {
        matches!(self, Self::AssumeFullscreen)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueryConfig {
    pub fallback: FallbackPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Milliseconds between two reads.
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Pointer distance from the top edge (points) at or below which the
    /// overlay hides to make room for the menu bar.
    pub hide_threshold: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "spaceprobe=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_threshold: 35.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl WatchConfig {
    pub fn poll_interval(&self) -> ProbeResult<PollInterval> {
        PollInterval::from_millis(self.interval_ms)
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> ProbeResult<Self> {
        if !path.exists() {
            return Err(ProbeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> ProbeResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> ProbeResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the watch loop and overlay rule cannot work with.
    pub fn validate(&self) -> ProbeResult<()> {
        self.watch.poll_interval()?;
        if !self.overlay.hide_threshold.is_finite() || self.overlay.hide_threshold < 0.0 {
            return Err(ProbeError::config(format!(
                "overlay.hide_threshold must be a non-negative number, got {}",
                self.overlay.hide_threshold
            )));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("spaceprobe").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_assume_windowed_and_poll_every_quarter_second() {
        let config = AppConfig::default();
        assert_eq!(config.query.fallback, FallbackPolicy::AssumeWindowed);
        assert!(!config.query.fallback.fallback_value());
        assert_eq!(config.watch.interval_ms, 250);
        assert_eq!(config.overlay.hide_threshold, 35.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "query": { "fallback": "assume_fullscreen" } }"#).unwrap();
        assert_eq!(config.query.fallback, FallbackPolicy::AssumeFullscreen);
        assert_eq!(config.watch, WatchConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.watch.interval_ms = 500;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "watch": { "interval_ms": 0 } }"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ProbeError::Config { .. }));
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ProbeError::FileNotFound { .. }));
    }

    #[test]
    fn huge_watch_interval_is_rejected() {
        let mut config = AppConfig::default();
        config.watch.interval_ms = 18_446_744_073_709_551;
        assert!(matches!(config.validate(), Err(ProbeError::Config { .. })));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let mut config = AppConfig::default();
        config.overlay.hide_threshold = -1.0;
        assert!(config.validate().is_err());
    }
}
