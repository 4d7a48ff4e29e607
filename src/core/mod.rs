//! Core application functionality
//!
//! This module contains the command line front end:
//! - CLI parsing and validation
//! - User settings file
//! - Running a preview and reporting it

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod report;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use report::{PreviewReport, ReportItem};
pub use runner::{run_app, run_preview};
