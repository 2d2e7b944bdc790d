use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize tracing and logging
///
/// `RUST_LOG` takes precedence over the configured level. JSON lines are
/// emitted when the configured format is `json`, a readable console format
/// otherwise. Logs go to stderr so `render` can stream the page to stdout.
pub fn init_observability(service_name: &str, logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
    }

    tracing::info!(
        service.name = service_name,
        service.version = env!("CARGO_PKG_VERSION"),
        log.level = %logging.level,
        "Observability initialized"
    );

    Ok(())
}
