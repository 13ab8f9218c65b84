//! Demo configuration
//!
//! Defaults reproduce the classic run: two 5×5 matrices with entries in
//! `[1, 5]`. A JSON file named by `COFACTOR_CONFIG` overrides any field.

use std::env;
use std::fs;
use cofactor_matrix::Presentation;
use serde::{Deserialize, Serialize};
use crate::error::DemoError;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "COFACTOR_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Side length of the square matrices
    pub size: usize,
    /// Smallest random entry
    pub min: i64,
    /// Largest random entry
    pub max: i64,
    /// Seed of the first matrix; the second uses `seed + 1`
    pub seed: u64,
    pub presentation: Presentation,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 5,
            min: 1,
            max: 5,
            seed: 12345,
            presentation: Presentation::default(),
        }
    }
}

impl DemoConfig {
    /// Parse a JSON document
    pub fn from_json(path: &str, text: &str) -> Result<Self, DemoError> {
        serde_json::from_str(text).map_err(|source| DemoError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }

    /// Load from `COFACTOR_CONFIG` when set, otherwise use defaults
    pub fn load() -> Result<Self, DemoError> {
        let Ok(path) = env::var(CONFIG_ENV) else {
            tracing::debug!("{} not set, using default config", CONFIG_ENV);
            return Ok(Self::default());
        };

        let text = fs::read_to_string(&path).map_err(|source| DemoError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let cfg = Self::from_json(&path, &text)?;
        tracing::info!(%path, size = cfg.size, "loaded config");
        Ok(cfg)
    }
}
