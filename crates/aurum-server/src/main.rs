//! `aurum-server` binary.

use anyhow::{Context, Result};
use aurum_server::config::LogFormat;
use aurum_server::{serve, telemetry, ServerConfig};
use clap::Parser;
use std::path::PathBuf;

/// Aurum jewelry catalog API server.
#[derive(Parser, Debug)]
#[command(name = "aurum-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen host
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON seed file for the catalog store
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Log format: human or json
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ServerConfig::default(),
        };
        config = config
            .apply_env()
            .context("Invalid AURUM_* environment override")?;

        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(format) = self.log_format {
            let format: LogFormat = format.parse()?;
            config = config.with_log_format(format);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    telemetry::init_tracing(&config.log)?;

    serve(config).await.context("Server failed")
}
