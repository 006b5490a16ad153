pub mod types;
pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));

    // Promote is the only command, and the default
    match commands::handle_promote_command(cli.command.as_ref(), &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to promote files: {}", e);
            ExitCode::FAILURE
        }
    }
}
