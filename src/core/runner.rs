//! Application runner logic
//!
//! Loads the font, builds a preview session and prints its output

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::report::PreviewReport;
use crate::font_source::load_ufo_from_path;
use crate::preview::PreviewSession;

/// Run the previewer with the given CLI arguments.
/// Handles special CLI flags before touching any font.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    let config = ConfigFile::load().unwrap_or_default();
    run_preview(&cli_args, &config)
}

/// Validate the arguments, load the font and print its preview using
/// `config` for everything the command line leaves unset
pub fn run_preview(cli_args: &CliArgs, config: &ConfigFile) -> Result<()> {
    cli_args.validate().map_err(anyhow::Error::msg)?;

    let settings = cli_args.preview_settings(config);
    debug!("Preview settings: {:?}", settings);

    let Some(font_path) = cli_args.font_source.as_deref() else {
        bail!("No font source given");
    };
    let font = load_ufo_from_path(font_path)?;
    info!(
        "Loaded {} with {} glyphs",
        font.info.get_display_name(),
        font.glyphs.len()
    );

    let mut session = PreviewSession::new(font, settings, &config.contextual_tag);

    if let Some(glyph_name) = cli_args.glyph.as_deref() {
        if !session.font().contains(glyph_name) {
            bail!(
                "Glyph '{}' is not in {}",
                glyph_name,
                font_path.display()
            );
        }
        session.current_glyph_changed(Some(glyph_name));
    }

    let items = session.preview();
    let report = PreviewReport::new(&session, &items);

    if cli_args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
