//! CLI module for the Galaxia client
//!
//! Provides subcommands:
//! - `query`: submit a query, wait for processing and print the results

pub mod query;

use clap::{Parser, Subcommand};

/// Galaxia client - query a knowledge base through the analysis service
#[derive(Parser)]
#[command(name = "galaxia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a single query and print the matches as JSON
    Query(query::QueryArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_command() {
        let cli = Cli::try_parse_from([
            "galaxia",
            "query",
            "capital of France",
            "--raw",
            "--n-retries",
            "3",
        ])
        .unwrap();

        let Command::Query(args) = cli.command;
        assert_eq!(args.text, "capital of France");
        assert!(args.raw);
        assert_eq!(args.n_retries, Some(3));
        assert_eq!(args.wait_time, None);
    }
}
