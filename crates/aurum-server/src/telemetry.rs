//! Tracing setup.

use crate::config::{LogConfig, LogFormat};
use crate::ServerError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// filter.
pub fn init_tracing(config: &LogConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| ServerError::Config(format!("invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Human => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };
    result.map_err(|e| ServerError::Config(format!("tracing already initialized: {}", e)))
}
