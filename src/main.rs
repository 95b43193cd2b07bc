mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod filter;
mod logging;
mod output;
mod route;
mod tui;

use clap::Parser;
use error::{ErrorFormatter, RichError};

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;
    logging::init(verbose, cli.command.is_interactive());

    if let Err(err) = commands::dispatch(cli) {
        let rich = RichError::from(err);
        tracing::debug!(code = rich.code().as_str(), detail = rich.message(), "command failed");
        eprintln!("{}", ErrorFormatter::new(verbose).format(&rich));
        std::process::exit(1);
    }
}
