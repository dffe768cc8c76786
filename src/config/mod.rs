//! Configuration management for Tally
//!
//! Defaults merged with an optional `.tally.toml` from the working directory
//! (or an explicit `--config` path) and `TALLY_`-prefixed environment
//! variables. Only presentation-side defaults live here; the worker pool is
//! always sized to the host's available parallelism and is deliberately not
//! configurable.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".tally.toml";

/// Execution strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single synchronous pass on the calling thread
    Sequential,
    /// Chunks dispatched across a worker pool
    Parallel,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Sequential => write!(f, "sequential"),
            Mode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Main configuration structure for Tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Strategy used when --mode is not given
    pub default_mode: Mode,

    /// Chunk-count hint used when --chunks is not given in parallel mode
    pub default_chunks: usize,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Sequential,
            default_chunks: 4,
        }
    }
}

impl TallyConfig {
    /// Load configuration: defaults < config file < environment.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let file = config_path.unwrap_or(CONFIG_FILE);
        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("TALLY_"))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the figment merge cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.default_chunks == 0 {
            bail!("default_chunks must be a positive integer (got 0)");
        }
        Ok(())
    }

    /// Commented template written by `tally config init`.
    pub fn template() -> String {
        format!(
            "# Tally configuration\n\
             # Strategy used when --mode is not given: \"sequential\" or \"parallel\"\n\
             default_mode = \"sequential\"\n\
             # Chunk-count hint used when --chunks is not given in parallel mode\n\
             default_chunks = {}\n",
            TallyConfig::default().default_chunks
        )
    }
}
