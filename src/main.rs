mod commands;
mod config;
mod error;
mod logger;

use clap::Parser;

use crate::{commands::Cli, error::AppError};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = config::load(cli.config.as_deref())?;
    logger::initialize(&config.logger);
    commands::run(cli, &config)
}
