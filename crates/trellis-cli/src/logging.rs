//! Logging initialization for the `trellis` binary.

use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

/// Install a stderr subscriber.
///
/// An explicit `level` wins; otherwise `RUST_LOG`, then `fallback` (the
/// configured level) decide the filter.
pub fn init_logging(level: Option<&str>, fallback: &str) -> anyhow::Result<()> {
    let env_filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}
