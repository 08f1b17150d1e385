//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use topshop_data::{CatalogClient, FetchClient, RetryPolicy};
use tracing::debug;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(Path::new(path))?, Some(PathBuf::from(path))),
            None => match find_config_file(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };
        debug!(config = ?config_path, "loaded configuration");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build a catalog client from the `[catalog]` settings.
    pub fn catalog(&self) -> Result<CatalogClient> {
        let settings = &self.config.catalog;
        let client = FetchClient::http(Duration::from_millis(settings.timeout_ms))
            .context("Failed to create HTTP client")?
            .with_base_url(settings.base_url.clone())
            .with_retry(RetryPolicy::new(settings.max_retries));
        Ok(CatalogClient::new(client))
    }
}

/// Find a config file in `start` or any of its parents.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".topshop.toml"), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(".topshop.toml"));
    }

    #[test]
    fn test_find_config_prefers_toml_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("topshop.json"), "{}").unwrap();
        std::fs::write(dir.path().join("topshop.toml"), "").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("topshop.toml"));
    }
}
