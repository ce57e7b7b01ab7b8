mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{categories, filter, render};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match &cli.command {
        Commands::Categories(args) => categories::run(&cli, args),
        Commands::Filter(args) => filter::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
