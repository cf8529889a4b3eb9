//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Progress indicator display delay in milliseconds
    #[serde(default = "default_progress_delay_ms")]
    pub progress_delay_ms: u64,
    /// Measurement endpoint for page-view reporting; absent disables it
    #[serde(default)]
    pub analytics_endpoint: Option<String>,
}

fn default_progress_delay_ms() -> u64 {
    100
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_delay_ms: default_progress_delay_ms(),
            analytics_endpoint: None,
        }
    }
}
