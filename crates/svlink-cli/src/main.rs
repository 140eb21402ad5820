use std::process::ExitCode;
use svlink_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; stdout stays clean either way.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("svlink error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
