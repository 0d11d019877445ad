mod backup;
mod cli;
mod profiles;
mod share;
mod size;

use clap::Parser;
use cli::{Cli, Commands};
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Backup(args) => backup::run_backup(args)?,
        Commands::Profiles(args) => profiles::run_profiles(args)?,
        Commands::Size(args) => size::run_size(args)?,
    }

    Ok(())
}
