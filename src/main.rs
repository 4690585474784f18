mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::logging::*;
pub use services::output::*;
pub use services::syntax::*;
pub use services::transcoder::*;

use clap::Parser;
use std::process::ExitCode;

fn run(cli: &Cli) -> anyhow::Result<()> {
    if handle_config_commands(cli)? {
        return Ok(());
    }
    let cfg = load_config(cli.config.as_deref())?;
    handle_word_commands(cli, &cfg)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            if cli.json {
                print_error(&e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
