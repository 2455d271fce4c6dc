use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

fn main() -> seedveil_core::Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(cmd) => cmd.run(),
        Commands::Reveal(cmd) => cmd.run(),
    }
}
