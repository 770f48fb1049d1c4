// src/bin/cli.rs
use animals_web::{cli, log};
use clap::Parser;
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    log::init(args.verbose).map_err(|e| eyre!("logger setup failed: {e}"))?;

    if !cli::run(&args.into_options()).is_success() {
        std::process::exit(1);
    }
    Ok(())
}
