//! User configuration file handling
//!
//! Manages settings from ~/.config/anchor-preview/settings.json

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::anchors::DEFAULT_CONTEXTUAL_TAG;
use crate::assembly::ExtraSidebearings;
use crate::core::settings::{APP_NAME, DEFAULT_LINE_HEIGHT, DEFAULT_TEXT_SIZE};
use crate::preview::{parse_glyph_list, CalibrationGroup, PreviewSettings};

/// User configuration from ~/.config/anchor-preview/settings.json
///
/// These settings override built-in defaults but are overridden by CLI
/// arguments. Fields missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Point size of the preview line
    pub text_size: u32,
    pub line_height: i32,
    /// `[left, right]` units added to every preview composite
    pub extra_sidebearings: ExtraSidebearings,
    /// Whitespace-separated glyphs shown between the composites
    pub extra_glyphs: String,
    pub calibrate_mode: bool,
    pub calibrate_groups: Vec<CalibrationGroup>,
    /// Marker that makes a base anchor contextual, e.g. `top_ctx`
    pub contextual_tag: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            text_size: DEFAULT_TEXT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            extra_sidebearings: ExtraSidebearings::default(),
            extra_glyphs: String::new(),
            calibrate_mode: false,
            calibrate_groups: CalibrationGroup::defaults(),
            contextual_tag: DEFAULT_CONTEXTUAL_TAG.to_string(),
        }
    }
}

impl ConfigFile {
    /// Get the path to the config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_NAME)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => {
                debug!("Loaded user settings from {:?}", path);
                Some(config)
            }
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Read and parse a settings file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Create the config directory with a default settings.json and an
    /// empty logs/ directory
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create {}", config_dir.display()))?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::default().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        Ok(())
    }

    /// Preview parameters described by this file
    pub fn preview_settings(&self) -> PreviewSettings {
        PreviewSettings {
            extra_sidebearings: self.extra_sidebearings,
            extra_glyphs: parse_glyph_list(&self.extra_glyphs),
            calibrate_mode: self.calibrate_mode,
            calibrate_groups: self.calibrate_groups.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.json");
        let config = ConfigFile {
            extra_sidebearings: ExtraSidebearings::new(12, 30),
            extra_glyphs: "H O".to_string(),
            calibrate_mode: true,
            ..ConfigFile::default()
        };

        config.save_to(&path).expect("save settings");
        let loaded = ConfigFile::load_from(&path).expect("load settings");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "extra_sidebearings": [5, 7], "text_size": 90 }"#)
            .expect("write settings");

        let loaded = ConfigFile::load_from(&path).expect("load settings");

        assert_eq!(loaded.text_size, 90);
        assert_eq!(loaded.line_height, DEFAULT_LINE_HEIGHT);
        assert_eq!(loaded.extra_sidebearings, ExtraSidebearings::new(5, 7));
        assert_eq!(loaded.calibrate_groups, CalibrationGroup::defaults());
        assert_eq!(loaded.contextual_tag, DEFAULT_CONTEXTUAL_TAG);
    }

    #[test]
    fn malformed_file_is_an_error_naming_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").expect("write settings");

        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("settings.json"));
    }

    #[test]
    fn preview_settings_split_extra_glyphs() {
        let config = ConfigFile {
            extra_glyphs: " n  o ".to_string(),
            ..ConfigFile::default()
        };
        let settings = config.preview_settings();
        assert_eq!(settings.extra_glyphs, ["n", "o"]);
        assert!(!settings.calibrate_mode);
    }
}
