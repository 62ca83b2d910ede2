//! User-facing flash settings that persist across runs.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::DEFAULT_ANIMATION_LENGTH;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Flash settings, loaded from disk on startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashSettings {
    /// When false, flash requests are dropped (accessibility option).
    pub enabled: bool,
    /// Flash length in seconds for requests that do not specify one.
    pub default_animation_length: f32,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_animation_length: DEFAULT_ANIMATION_LENGTH,
        }
    }
}

impl FlashSettings {
    /// Resolves a requested flash length.
    ///
    /// Negative, non-finite or missing lengths fall back to the configured
    /// default, and a broken default falls back to [`DEFAULT_ANIMATION_LENGTH`].
    pub fn animation_length(&self, requested: Option<f32>) -> Duration {
        requested
            .and_then(|seconds| Duration::try_from_secs_f32(seconds).ok())
            .or_else(|| Duration::try_from_secs_f32(self.default_animation_length).ok())
            .unwrap_or_else(|| Duration::from_secs_f32(DEFAULT_ANIMATION_LENGTH))
    }

    /// Loads the settings from the default location, or returns defaults.
    ///
    /// Location is platform-specific:
    /// - macOS: ~/Library/Application Support/color_flash/
    /// - Linux: ~/.config/color_flash/
    /// - Windows: %APPDATA%/color_flash/
    pub fn load_from_file() -> Self {
        let Some(path) = Self::get_settings_path() else {
            warn!("Could not determine config directory, using default flash settings");
            return Self::default();
        };

        if !path.exists() {
            info!("No flash settings found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    info!("Loaded flash settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    error!("Failed to parse flash settings: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read flash settings: {}", e);
                Self::default()
            }
        }
    }

    /// Returns the platform-specific path of the settings file.
    pub fn get_settings_path() -> Option<std::path::PathBuf> {
        Self::get_settings_dir().map(|mut path| {
            path.push(SETTINGS_FILE_NAME);
            path
        })
    }

    /// Returns the platform-specific directory holding the settings file.
    pub fn get_settings_dir() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("color_flash");
            path
        })
    }

    /// Saves the settings to the default location, creating the directory if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let Some(path) = Self::get_settings_path() else {
            return Err("Could not determine config directory".to_string());
        };

        if let Some(dir) = Self::get_settings_dir() {
            if !dir.exists() {
                if let Err(e) = std::fs::create_dir_all(&dir) {
                    return Err(format!("Failed to create config directory: {}", e));
                }
                info!("Created config directory: {:?}", dir);
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => {
                    info!("Saved flash settings to {:?}", path);
                    Ok(())
                }
                Err(e) => Err(format!("Failed to write flash settings: {}", e)),
            },
            Err(e) => Err(format!("Failed to serialize flash settings: {}", e)),
        }
    }
}
