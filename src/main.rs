use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use storm_ledger::catalog::{NameMatch, StormCatalog};
use storm_ledger::cli::{Args, Command};
use storm_ledger::config::{Config, ConfigSource};
use storm_ledger::report;
use storm_ledger::session::MenuSession;
use storm_ledger::utils::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, source) = Config::load_or_default(&args.config).await?;

    let verbosity = if args.verbose { "verbose" } else { config.logging.verbosity.as_str() };
    setup_logging(verbosity)?;

    if source == ConfigSource::Defaults {
        warn!("Config file {} not found, using defaults", args.config.display());
    }

    let input = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.catalog.data_file));

    info!("Loading catalog from {}", input.display());
    let catalog = StormCatalog::from_file(&input)
        .with_context(|| format!("Failed to load catalog {}", input.display()))?
        .with_name_match(config.search.name_match);
    info!("Loaded {} records", catalog.len());

    run(catalog, args.command.unwrap_or(Command::Menu))
}

fn run(mut catalog: StormCatalog, command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Menu => {
            let stdin = io::stdin();
            let mut session = MenuSession::new(catalog, stdin.lock(), out);
            session.run()?;
            return Ok(());
        }
        Command::List => {
            report::write_records(&mut out, catalog.records())?;
        }
        Command::Sort { by } => {
            info!("Sorting by {}", by);
            catalog.sort_by(by);
            report::write_records(&mut out, catalog.records())?;
        }
        Command::Stats { json } => {
            if json {
                report::write_summary_json(&mut out, &catalog)?;
            } else {
                report::write_aggregate(&mut out, report::extremes(&catalog))?;
                report::write_aggregate(&mut out, report::averages(&catalog))?;
            }
        }
        Command::SearchYear { year } => {
            let matches = catalog.search_year(year);
            report::write_records(&mut out, &matches)?;
        }
        Command::SearchName { name, ignore_case } => {
            if ignore_case {
                catalog.set_name_match(NameMatch::IgnoreCase);
            }
            let matches = catalog.search_name(&name);
            report::write_records(&mut out, &matches)?;
        }
    }

    out.flush()?;
    Ok(())
}
