use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

pub fn log_level(verbosity: &str) -> Level {
    match verbosity {
        "silent" => Level::ERROR,
        "normal" => Level::INFO,
        "verbose" => Level::DEBUG,
        _ => Level::INFO,
    }
}

/// Installs the global subscriber. Logs go to stderr so that reports on stdout stay clean.
pub fn setup_logging(verbosity: &str) -> Result<()> {
    let level = log_level(verbosity);

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("storm_ledger={}", level).parse()?);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level("silent"), Level::ERROR);
        assert_eq!(log_level("normal"), Level::INFO);
        assert_eq!(log_level("verbose"), Level::DEBUG);
        assert_eq!(log_level("unknown"), Level::INFO);
    }
}
