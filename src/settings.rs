//! Game settings and preferences
//!
//! Persisted as a small JSON file beside the binary. A missing or
//! unreadable file silently falls back to defaults; the game must always
//! start.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pin the brick color shuffle for reproducible sessions; `None` lets
    /// the host pick a seed at startup
    pub seed: Option<u64>,
    /// Show the elapsed-time readout in the HUD
    pub show_timer: bool,
    /// Log frame statistics from the host loop
    pub log_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_timer: true,
            log_fps: false,
        }
    }
}

impl Settings {
    /// Settings file path, relative to the working directory
    const STORAGE_PATH: &'static str = "breaker_settings.json";

    /// Load settings, falling back to defaults if the file is missing or
    /// does not parse
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::STORAGE_PATH) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::STORAGE_PATH);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::STORAGE_PATH);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::STORAGE_PATH, json) {
                    log::warn!("Failed to write {}: {err}", Self::STORAGE_PATH);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert!(settings.show_timer);
        assert!(!settings.log_fps);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(42),
            show_timer: false,
            log_fps: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(42));
        assert!(!back.show_timer);
        assert!(back.log_fps);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(back.seed, Some(7));
        assert!(back.show_timer);
    }
}
