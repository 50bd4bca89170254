use std::process::ExitCode;

use clap::Parser;
use trellis_cli::{logging::init_logging, Cli, Commands};

mod commands;

use commands::{load_config, node, Session};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    init_logging(cli.log_level.as_deref(), &config.logging.level)?;

    let session = Session::open(cli, &config)?;
    match &cli.command {
        Commands::Node { command } => node::handle(command, &session),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
