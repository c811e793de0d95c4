//! Chain configuration: blocklist, cache file and log path.
//! Loaded from the environment variables BLOCKED_IPS, CACHE_FILE and LOG_FILE.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use chain_core::{ChainError, Result};
use tracing::info;

/// Settings for building the default chain order. `None` fields fall back to handler defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainConfig {
    /// Origins to block; `None` keeps the built-in blocklist.
    pub blocked_ips: Option<Vec<String>>,
    /// JSON file holding an object of request id -> cached response.
    pub cache_file: Option<PathBuf>,
    pub log_file: Option<String>,
}

impl ChainConfig {
    /// Loads from the process environment: BLOCKED_IPS (comma-separated), CACHE_FILE, LOG_FILE; all optional.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            blocked_ips: var("BLOCKED_IPS").map(|v| parse_blocked_ips(&v)),
            cache_file: var("CACHE_FILE").map(PathBuf::from),
            log_file: var("LOG_FILE"),
        }
    }

    /// Reads the cache file if one is configured. The file must contain a JSON object of strings.
    pub fn load_cache_entries(&self) -> Result<Option<HashMap<String, String>>> {
        let Some(path) = &self.cache_file else {
            return Ok(None);
        };
        let raw = fs::read_to_string(path).map_err(|e| {
            ChainError::Config(format!("Cannot read cache file {}: {}", path.display(), e))
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&raw)?;
        info!(
            cache_file = %path.display(),
            entries = entries.len(),
            "Loaded cache entries"
        );
        Ok(Some(entries))
    }
}

/// Splits a comma-separated blocklist, trimming entries and dropping blanks.
pub fn parse_blocked_ips(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .collect()
}
