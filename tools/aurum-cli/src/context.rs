//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use aurum_db::{MemoryStore, SeedData};
use aurum_query::prelude::*;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["aurum.toml", ".aurum.toml", "aurum.json"];

/// Where catalog data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The HTTP API at this base URL.
    Api(String),
    /// A seed file served from an in-process store.
    Seed(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Api(url) => write!(f, "{}", url),
            Source::Seed(path) => write!(f, "seed file {}", path.display()),
        }
    }
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog data source.
    pub source: Source,
    /// Shared query cache every command reads through.
    pub client: QueryClient,
}

impl Context {
    /// Load config and connect to the catalog.
    ///
    /// With `seed`, the catalog is read from that file instead of the API.
    /// `AURUM_API_URL` overrides the configured API URL.
    pub async fn load(
        config_path: Option<&Path>,
        seed: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(path.to_path_buf())),
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Ok(url) = std::env::var("AURUM_API_URL") {
            config.api_url = url;
        }

        let (source, fetcher): (Source, Arc<dyn Fetcher>) = match seed {
            Some(path) => {
                let data = SeedData::load(&path)
                    .await
                    .with_context(|| format!("Failed to load seed file: {}", path.display()))?;
                let store = MemoryStore::with_seed(data)?;
                (Source::Seed(path), Arc::new(StoreFetcher::new(Arc::new(store))))
            }
            None => {
                let fetcher = HttpFetcher::new(config.api_url.clone(), config.timeout())
                    .context("Failed to build HTTP client")?;
                (Source::Api(config.api_url.clone()), Arc::new(fetcher))
            }
        };
        tracing::debug!(%source, "Catalog source selected");
        output.debug(&format!("Catalog source: {}", source));

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            source,
            client: QueryClient::new(fetcher),
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
