//! Runtime configuration, read from the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `BLOCK_PUZZLE_SEED` | RNG seed (u32); clock-derived when unset |
//! | `BLOCK_PUZZLE_LOG` | Log file path; logging is off when unset |
//!
//! The log filter itself follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

pub const SEED_VAR: &str = "BLOCK_PUZZLE_SEED";
pub const LOG_VAR: &str = "BLOCK_PUZZLE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = match get(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{SEED_VAR} must be a u32, got {raw:?}"))?,
            None => clock_seed(),
        };

        Ok(Self {
            seed,
            log_file: get(LOG_VAR).map(PathBuf::from),
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
