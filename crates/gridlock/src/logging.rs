//! Tracing setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to `log_file`.
///
/// Both presentation modes own the terminal, so nothing is logged to it.
/// `RUST_LOG` takes precedence over `filter`. A subscriber that is already
/// installed is left in place.
pub fn init_tracing(filter: &str, log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    tracing::info!(log_file = %log_file.display(), "Tracing initialized");
    Ok(())
}
