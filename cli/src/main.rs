mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{compose, inspect, visits};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match &cli.command {
        Commands::Inspect(args) => inspect::run(&cli, args),
        Commands::Compose(args) => compose::run(&cli, args),
        Commands::TrackVisit(args) => visits::track(&cli, args),
        Commands::Visits => visits::summary(&cli),
    }
}

fn main() -> anyhow::Result<()> { run() }
