pub mod model;


use anyhow::Result;
use std::path::Path;
use tokio::fs;
use crate::constants::VALID_VERBOSITY_LEVELS;

// Re-export main types
pub use self::model::{CatalogConfig, Config, LoggingConfig, SearchConfig};

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

impl Config {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults. Runs before logging is
    /// set up, so the caller reports the fallback.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, ConfigSource)> {
        let path = path.as_ref();
        if !fs::try_exists(path).await? {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        Ok((Self::load(path).await?, ConfigSource::File))
    }

    pub async fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.data_file.trim().is_empty() {
            anyhow::bail!("catalog.data_file cannot be empty");
        }

        if !VALID_VERBOSITY_LEVELS.contains(&self.logging.verbosity.as_str()) {
            anyhow::bail!("verbosity must be 'silent', 'normal', or 'verbose'");
        }

        Ok(())
    }
}
