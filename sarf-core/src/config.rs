use crate::error::{Result, SarfError};
use crate::params::Dialect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_ENV: &str = "SARF_CONFIG";

/// Engine settings shared by the library front ends and the CLI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dialect used when a request does not name one.
    #[serde(default)]
    pub default_dialect: Dialect,
    /// Worker threads for analysis. `None` uses the global rayon pool.
    #[serde(default)]
    pub analyzer_threads: Option<usize>,
    /// Elided weak radicals the analyzer may re-insert per candidate.
    #[serde(default = "default_max_insertions")]
    pub analyzer_max_insertions: usize,
    /// Dialects searched when an analysis request does not pin one.
    #[serde(default = "default_analyzer_dialects")]
    pub analyzer_dialects: Vec<Dialect>,
    /// Print Buckwalter instead of Arabic script.
    #[serde(default)]
    pub render_buckwalter: bool,
}

fn default_max_insertions() -> usize {
    2
}

fn default_analyzer_dialects() -> Vec<Dialect> {
    Dialect::ALL.to_vec()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_dialect: Dialect::Msa,
            analyzer_threads: None,
            analyzer_max_insertions: default_max_insertions(),
            analyzer_dialects: default_analyzer_dialects(),
            render_buckwalter: false,
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(SarfError::from)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads the file named by `SARF_CONFIG`, or the defaults when unset.
    pub fn from_env_or_default() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }
}
