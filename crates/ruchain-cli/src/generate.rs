//! # Generate Subcommand
//!
//! Drives chain generation over a range of ring sizes and writes the
//! tables for each one.
//!
//! ## Usage
//!
//! ```bash
//! # Reference range (3..=15) into ./EqnData:
//! ruchain generate
//!
//! # One ring size as JSON:
//! ruchain generate --ring-size 8 --format json --out tables/
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use ruchain_markov::{ChainTables, MarkovChain};

use crate::config::{GeneratorConfig, OutputFormat};
use crate::output::write_tables;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Generate a single ring size (overrides --min/--max).
    #[arg(long, short = 'n', conflicts_with_all = ["min", "max"])]
    pub ring_size: Option<usize>,

    /// Smallest ring size to generate.
    #[arg(long)]
    pub min: Option<usize>,

    /// Largest ring size to generate.
    #[arg(long)]
    pub max: Option<usize>,

    /// Output directory for the tables.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Table format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl GenerateArgs {
    /// Overlay the flags on top of `base`.
    pub fn resolve(&self, base: &GeneratorConfig) -> GeneratorConfig {
        let mut config = base.clone();
        if let Some(n) = self.ring_size {
            config.min_ring_size = n;
            config.max_ring_size = n;
        }
        if let Some(min) = self.min {
            config.min_ring_size = min;
        }
        if let Some(max) = self.max {
            config.max_ring_size = max;
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, base: &GeneratorConfig) -> Result<u8> {
    let config = args.resolve(base);
    config.validate()?;

    for ring_size in config.ring_sizes() {
        let started = Instant::now();
        let chain = MarkovChain::generate(ring_size)
            .with_context(|| format!("chain generation failed for ring size {ring_size}"))?;
        let tables = ChainTables::from(&chain);
        let written = write_tables(&tables, &config.output_dir, config.format)?;

        tracing::info!(
            ring_size,
            states = chain.state_count(),
            transitions = chain.transition_count(),
            files = written.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated chain tables"
        );
        println!(
            "numRUs = {ring_size}: {} states, {} transitions ({:.3} s)",
            chain.state_count(),
            chain.transition_count(),
            started.elapsed().as_secs_f64()
        );
    }

    Ok(0)
}
