//! # Generator Configuration
//!
//! Optional YAML file naming the ring sizes to generate and where to put
//! the tables. Every field has a default, and command-line flags override
//! whatever the file sets.
//!
//! ```yaml
//! min_ring_size: 3
//! max_ring_size: 15
//! output_dir: EqnData
//! format: text
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use ruchain_core::validate_ring_size;

/// How the tables for one ring size are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One text file per column.
    #[default]
    Text,
    /// One JSON document holding every column.
    Json,
}

/// Settings for a `generate` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Smallest ring size generated.
    pub min_ring_size: usize,
    /// Largest ring size generated.
    pub max_ring_size: usize,
    /// Directory receiving the tables.
    pub output_dir: PathBuf,
    /// Table format.
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_ring_size: 3,
            max_ring_size: 15,
            output_dir: PathBuf::from("EqnData"),
            format: OutputFormat::Text,
        }
    }
}

impl GeneratorConfig {
    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded generator config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject ranges that cannot be generated.
    pub fn validate(&self) -> Result<()> {
        validate_ring_size(self.min_ring_size).context("invalid min_ring_size")?;
        validate_ring_size(self.max_ring_size).context("invalid max_ring_size")?;
        if self.min_ring_size > self.max_ring_size {
            bail!(
                "min_ring_size ({}) exceeds max_ring_size ({})",
                self.min_ring_size,
                self.max_ring_size
            );
        }
        Ok(())
    }

    /// Ring sizes in generation order.
    pub fn ring_sizes(&self) -> std::ops::RangeInclusive<usize> {
        self.min_ring_size..=self.max_ring_size
    }
}
