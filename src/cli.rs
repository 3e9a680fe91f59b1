use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::SortKey;
use crate::constants::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "storm-ledger")]
#[command(about = "Storm Ledger: sort, search and summarize a historical hurricane catalog")]
#[command(version)]
pub struct Args {
    #[arg(short, long, help = "Catalog file (defaults to the configured data file)")]
    pub input: Option<PathBuf>,

    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, help = "Configuration file")]
    pub config: PathBuf,

    #[arg(short, long, help = "Verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (the default)
    Menu,
    /// Print every record in file order
    List,
    /// Sort the catalog and print it
    Sort {
        #[arg(short, long, value_enum)]
        by: SortKey,
    },
    /// Print extremes and averages
    Stats {
        #[arg(long, help = "Emit the summary as JSON")]
        json: bool,
    },
    /// Print every storm from a given year
    SearchYear { year: i32 },
    /// Print every storm with a given name
    SearchName {
        name: String,

        #[arg(long, help = "Match names regardless of case")]
        ignore_case: bool,
    },
}
