//! Tracing setup.
//!
//! The terminal is owned by the renderer, so log output never goes to stdout
//! or stderr. With a log path configured, events are appended to that file;
//! without one no subscriber is installed and every event is a no-op.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global file subscriber. The level filter comes from `RUST_LOG`
/// (default `info`).
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
