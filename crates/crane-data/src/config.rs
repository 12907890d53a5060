//! Solver configuration, read from an optional `crane.{ron,toml,json}`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crane_core::sim::ExecutionPolicy;

use crate::loader::{self, DataLoadError};

/// Base name of the configuration file, without extension.
pub const CONFIG_BASE_NAME: &str = "crane";

/// How puzzles are solved and reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CraneConfig {
    /// Policies to solve with, one answer each, in this order.
    pub policies: Vec<ExecutionPolicy>,
    /// Shown in the answer for a stack that ends empty.
    pub empty_marker: char,
    /// Events kept per run. 0 keeps none.
    pub event_capacity: usize,
}

impl Default for CraneConfig {
    fn default() -> Self {
        Self {
            policies: ExecutionPolicy::ALL.to_vec(),
            empty_marker: ' ',
            event_capacity: 0,
        }
    }
}

/// Load `crane.{ron,toml,json}` from `dir`.
///
/// A directory without a config file yields the default config; more than
/// one format for the same name is an error.
pub fn load_config(dir: &Path) -> Result<CraneConfig, DataLoadError> {
    match loader::locate(dir, CONFIG_BASE_NAME)? {
        Some(path) => loader::read_file(&path),
        None => Ok(CraneConfig::default()),
    }
}
