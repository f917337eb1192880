//! Configuration for graph construction.
//!
//! Load order: `lexnet.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration consumed by [`crate::builder::LexGraphBuilder`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub index: IndexConfig,
}

/// Orthographic-index configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Normalize all index keys and lookup queries to lower case.
    /// Fixed at builder construction; not configurable per call.
    pub ignore_case: bool,
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl GraphConfig {
    /// Load config from `lexnet.toml` in the given directory, with env var
    /// overrides. Falls back to defaults if no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("lexnet.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("LEXNET_IGNORE_CASE", &mut config.index.ignore_case);

        Ok(config)
    }
}
