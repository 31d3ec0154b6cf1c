use anyhow::Result;
use clap::Parser;
use clijgen::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.into_config()?;
    clijgen::commands::generate::run(&config)?;
    Ok(())
}
