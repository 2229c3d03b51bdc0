mod dump;
mod query;
mod upload;

use std::path::PathBuf;

use arca_triple_store::TripleStoreClient;
use clap::{Parser, Subcommand};

use crate::{config::Config, error::AppError};

#[derive(Debug, Parser)]
#[command(
    name = "arca",
    about = "Import and operations tool for a SPARQL triple store"
)]
pub(crate) struct Cli {
    /// Custom config file (.toml format)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Dump the whole store as N-Quads
    Dump {
        /// Write to this file instead of standard output
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Bulk-load a serialized RDF file (.nq or .ttl, by extension)
    Upload {
        /// File to upload
        file: PathBuf,
        /// Named graph receiving the triples (required for Turtle,
        /// rejected for N-Quads)
        #[arg(short, long, value_name = "URI")]
        graph: Option<String>,
    },
    /// Run a SPARQL file against the store
    Query {
        /// File holding the statement
        file: PathBuf,
    },
}

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let client = TripleStoreClient::connect(config.store.clone())?;

    match &cli.command {
        Command::Dump { output } => dump::run(&client, output.as_deref()),
        Command::Upload { file, graph } => upload::run(&client, file, graph.as_deref()),
        Command::Query { file } => query::run(&client, file),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
