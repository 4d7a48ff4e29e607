//! Preview mark attachments of a UFO font from the command line.

use anchor_preview::{core, logging};

fn main() {
    let cli_args = core::platform::get_cli_args();
    let _log_guard = match logging::init_logging(cli_args.log_file) {
        Ok(guard) => guard,
        Err(error) => core::platform::handle_error(error),
    };
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
