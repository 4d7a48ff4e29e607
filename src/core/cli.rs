//! Command line interface for anchor previews
//!
//! Handles parsing command line arguments and provides validation for
//! user inputs.

use clap::Parser;
use std::path::PathBuf;

use crate::assembly::ExtraSidebearings;
use crate::core::config_file::ConfigFile;
use crate::preview::{parse_glyph_list, PreviewSettings};

/// anchor-preview CLI arguments
///
/// Examples:
///   anchor-preview MyFont.ufo --glyph o                  # o with every mark
///   anchor-preview MyFont.ufo --glyph acutecomb          # every base for acutecomb
///   anchor-preview MyFont.ufo --calibrate                # calibration groups
///   anchor-preview MyFont.ufo -g o --extra-glyphs "n o"  # flank each combination
///   anchor-preview --new-config                          # write default settings
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "anchor-preview",
    version,
    about = "Preview mark attachments of a UFO font",
    long_about = "Lists the glyphs that attach to a glyph through its anchors and assembles each combination, reporting advances, sidebearings and anchor problems."
)]
pub struct CliArgs {
    /// Path to a UFO source
    #[clap(
        value_name = "UFO",
        required_unless_present = "new_config",
        help = "UFO source to read"
    )]
    pub font_source: Option<PathBuf>,

    /// Glyph whose combinations are previewed
    #[clap(long = "glyph", short = 'g', help = "Glyph to preview")]
    pub glyph: Option<String>,

    /// Show the calibration groups instead of a single glyph
    #[clap(long = "calibrate", help = "Preview the calibration groups")]
    pub calibrate: bool,

    /// Whitespace-separated glyphs placed between the combinations
    #[clap(long = "extra-glyphs", help = "Glyphs shown between combinations")]
    pub extra_glyphs: Option<String>,

    /// Extra left and right sidebearings for every combination
    #[clap(
        long = "extra-sidebearings",
        num_args = 2,
        value_names = ["LEFT", "RIGHT"],
        help = "Extra left and right sidebearings"
    )]
    pub extra_sidebearings: Option<Vec<u32>>,

    /// Print the preview as JSON
    #[clap(long = "json", help = "Print the preview as JSON")]
    pub json: bool,

    /// Write logs to the log directory instead of stderr
    #[clap(long = "log-file", help = "Write logs to the log directory")]
    pub log_file: bool,

    /// Create the config directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings"
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.font_source {
            if !path.exists() {
                return Err(format!(
                    "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
            if !path.is_dir() || !path.join("metainfo.plist").exists() {
                return Err(format!(
                    "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                    path.display()
                ));
            }
        }

        if self.glyph.is_none() && !self.calibrate && !self.new_config {
            return Err("Nothing to preview: pass --glyph NAME or --calibrate".to_string());
        }

        Ok(())
    }

    /// Preview settings from the config file with CLI overrides applied
    ///
    /// Priority order:
    /// 1. CLI arguments
    /// 2. Config file settings
    /// 3. Built-in defaults
    pub fn preview_settings(&self, config: &ConfigFile) -> PreviewSettings {
        let mut settings = config.preview_settings();
        if let Some(extra_glyphs) = &self.extra_glyphs {
            settings.extra_glyphs = parse_glyph_list(extra_glyphs);
        }
        if let Some([left, right]) = self.extra_sidebearings.as_deref() {
            settings.extra_sidebearings = ExtraSidebearings::new(*left, *right);
        }
        if self.calibrate {
            settings.calibrate_mode = true;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config_file() {
        let args = CliArgs::parse_from([
            "anchor-preview",
            "Font.ufo",
            "--glyph",
            "o",
            "--extra-glyphs",
            "H O",
            "--extra-sidebearings",
            "10",
            "20",
        ]);
        let config = ConfigFile {
            extra_glyphs: "n".to_string(),
            extra_sidebearings: ExtraSidebearings::new(1, 1),
            ..ConfigFile::default()
        };

        let settings = args.preview_settings(&config);

        assert_eq!(settings.extra_glyphs, ["H", "O"]);
        assert_eq!(settings.extra_sidebearings, ExtraSidebearings::new(10, 20));
        assert!(!settings.calibrate_mode);
    }

    #[test]
    fn config_file_fills_unset_flags() {
        let args = CliArgs::parse_from(["anchor-preview", "Font.ufo", "--calibrate"]);
        let config = ConfigFile {
            extra_glyphs: "n".to_string(),
            ..ConfigFile::default()
        };

        let settings = args.preview_settings(&config);

        assert_eq!(settings.extra_glyphs, ["n"]);
        assert!(settings.calibrate_mode);
    }

    #[test]
    fn font_source_is_optional_only_for_new_config() {
        assert!(CliArgs::try_parse_from(["anchor-preview", "--glyph", "o"]).is_err());
        assert!(CliArgs::try_parse_from(["anchor-preview", "--new-config"]).is_ok());
    }

    #[test]
    fn missing_font_source_fails_validation() {
        let args = CliArgs::parse_from(["anchor-preview", "/no/such/Font.ufo", "-g", "o"]);
        let err = args.validate().unwrap_err();
        assert!(err.contains("/no/such/Font.ufo"));
    }

    #[test]
    fn nothing_to_preview_fails_validation() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("metainfo.plist"), "").expect("write metainfo");
        let path = dir.path().to_string_lossy().into_owned();

        let args = CliArgs::parse_from(["anchor-preview", path.as_str()]);
        assert!(args.validate().unwrap_err().contains("Nothing to preview"));

        let args = CliArgs::parse_from(["anchor-preview", path.as_str(), "--calibrate"]);
        assert!(args.validate().is_ok());
    }
}
