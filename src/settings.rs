//! User settings stored as settings.json in the app data directory

use crate::constants::{
    DEFAULT_BACKEND_URL, DEFAULT_MOCK_SUCCESS_RATE, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STEP_DURATION,
    MAX_STEP_DURATION_MS, REQUEST_TIMEOUT_RANGE_SECS,
};
use crate::types::ConversionMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Conversion service
    pub backend_url: String,
    pub request_timeout_secs: u64,

    // Progress animation and mock conversions
    pub step_duration_ms: u64,
    pub mock_success_rate: f64,

    // Output
    pub output_path: Option<String>,
    pub auto_save: bool,

    // Last used form mode
    pub mode: ConversionMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            step_duration_ms: DEFAULT_STEP_DURATION.as_millis() as u64,
            mock_success_rate: DEFAULT_MOCK_SUCCESS_RATE,
            output_path: None,
            auto_save: false,
            mode: ConversionMode::default(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Self>(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings.clamped()
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Pull hand-edited values back into the ranges the settings modal allows
    pub fn clamped(mut self) -> Self {
        self.request_timeout_secs = self
            .request_timeout_secs
            .clamp(*REQUEST_TIMEOUT_RANGE_SECS.start(), *REQUEST_TIMEOUT_RANGE_SECS.end());
        self.step_duration_ms = self.step_duration_ms.min(MAX_STEP_DURATION_MS);
        self.mock_success_rate = if self.mock_success_rate.is_nan() {
            DEFAULT_MOCK_SUCCESS_RATE
        } else {
            self.mock_success_rate.clamp(0.0, 1.0)
        };
        if self.backend_url.trim().is_empty() {
            self.backend_url = DEFAULT_BACKEND_URL.to_string();
        }
        self
    }

    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_duration_ms)
    }

    pub fn output_path_or_default(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::download_dir()
                    .or_else(dirs::home_dir)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("TIBCO Converter")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            backend_url: "https://converter.internal:9443".into(),
            auto_save: true,
            mode: ConversionMode::Project,
            output_path: Some("/tmp/out".into()),
            ..Default::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "backend_url": "http://svc:8080", "step_duration_ms": 10 }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.backend_url, "http://svc:8080");
        assert_eq!(settings.step_duration(), Duration::from_millis(10));
        assert_eq!(settings.mock_success_rate, DEFAULT_MOCK_SUCCESS_RATE);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "request_timeout_secs": 0, "step_duration_ms": 999999, "mock_success_rate": 4.0, "backend_url": " " }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.request_timeout_secs, 5);
        assert_eq!(settings.step_duration_ms, MAX_STEP_DURATION_MS);
        assert_eq!(settings.mock_success_rate, 1.0);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn explicit_output_path_wins() {
        let settings = Settings {
            output_path: Some("/srv/converted".into()),
            ..Default::default()
        };
        assert_eq!(settings.output_path_or_default(), PathBuf::from("/srv/converted"));
    }
}
