//! Runtime configuration.
//!
//! Consolidates all environment variable reads:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `KLONDIKE_SEED` | derived from the clock | seed of the first deal |
//! | `KLONDIKE_LOG_PATH` | unset (no logging) | file that receives tracing output |
//! | `KLONDIKE_TICK_MS` | `TICK_MS` | frame interval in milliseconds |
//! | `RUST_LOG` | `info` | tracing filter, read by [`crate::logging`] |

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::TICK_MS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not valid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub tick: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = match lookup("KLONDIKE_SEED") {
            Some(value) => value.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                var: "KLONDIKE_SEED",
                value,
                reason: "expected an unsigned 32-bit integer",
            })?,
            None => clock_seed(),
        };

        let tick_ms = match lookup("KLONDIKE_TICK_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "KLONDIKE_TICK_MS",
                        value,
                        reason: "expected a positive number of milliseconds",
                    })
                }
            },
            None => TICK_MS as u64,
        };

        let log_path = lookup("KLONDIKE_LOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            seed,
            log_path,
            tick: Duration::from_millis(tick_ms),
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
