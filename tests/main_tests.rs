use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;
use storm_ledger::catalog::SortKey;
use storm_ledger::cli::{Args, Command};
use storm_ledger::Config;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing_defaults() {
        let args = Args::try_parse_from(["storm-ledger"]).unwrap();

        assert_eq!(args.input, None);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert!(!args.verbose);
        assert_eq!(args.command, None);
    }

    #[test]
    fn test_cli_parsing_long_args() {
        let args = Args::try_parse_from([
            "storm-ledger",
            "--input", "/data/storms.txt",
            "--config", "custom.json",
            "--verbose",
            "list",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("/data/storms.txt")));
        assert_eq!(args.config, PathBuf::from("custom.json"));
        assert!(args.verbose);
        assert_eq!(args.command, Some(Command::List));
    }

    #[test]
    fn test_cli_parsing_sort_keys() {
        for (value, key) in [
            ("year", SortKey::Year),
            ("name", SortKey::Name),
            ("category", SortKey::Category),
            ("pressure", SortKey::Pressure),
            ("speed", SortKey::Speed),
        ] {
            let args = Args::try_parse_from(["storm-ledger", "sort", "--by", value]).unwrap();
            assert_eq!(args.command, Some(Command::Sort { by: key }));
        }

        assert!(Args::try_parse_from(["storm-ledger", "sort", "--by", "color"]).is_err());
        assert!(Args::try_parse_from(["storm-ledger", "sort"]).is_err());
    }

    #[test]
    fn test_cli_parsing_searches() {
        let args = Args::try_parse_from(["storm-ledger", "-i", "h.txt", "search-year", "2005"]).unwrap();
        assert_eq!(args.command, Some(Command::SearchYear { year: 2005 }));

        let args = Args::try_parse_from(["storm-ledger", "search-name", "Katrina", "--ignore-case"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::SearchName { name: "Katrina".to_string(), ignore_case: true })
        );

        assert!(Args::try_parse_from(["storm-ledger", "search-year", "soon"]).is_err());
        assert!(Args::try_parse_from(["storm-ledger", "search-name"]).is_err());
    }

    #[test]
    fn test_cli_parsing_stats() {
        let args = Args::try_parse_from(["storm-ledger", "stats", "--json"]).unwrap();
        assert_eq!(args.command, Some(Command::Stats { json: true }));

        let args = Args::try_parse_from(["storm-ledger", "stats"]).unwrap();
        assert_eq!(args.command, Some(Command::Stats { json: false }));
    }

    #[tokio::test]
    async fn test_config_file_creation() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test_config.json");

        // Config doesn't exist initially
        assert!(!config_path.exists());

        let config = Config::default();
        config.to_file(&config_path).await?;
        assert!(config_path.exists());

        let loaded = Config::load(&config_path).await?;
        assert_eq!(loaded.catalog.data_file, config.catalog.data_file);
        assert_eq!(loaded.logging.verbosity, config.logging.verbosity);

        Ok(())
    }
}
