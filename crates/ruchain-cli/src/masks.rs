//! # Masks Subcommand
//!
//! For each activation mask, writes a 0/1 column over the states of a
//! chain saying which states contain the mask's pattern somewhere on the
//! ring. Equation assembly uses these columns to sum state occupancies.
//!
//! With `--uncovered` the column instead flags states whose canonical id,
//! read position by position, leaves some active unit of the mask off.
//!
//! ## Usage
//!
//! ```bash
//! ruchain masks --ring-size 5 --mask 11000 --mask 10100
//! # -> matches5_mdex1.txt, matches5_mdex2.txt
//! ruchain masks --ring-size 5 --mask 11000 --uncovered
//! # -> uncovered5_mdex1.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ruchain_core::{mask, ConfigurationError, RingConfiguration};
use ruchain_markov::MarkovChain;

use crate::output::write_mask_column;

/// Arguments for the masks subcommand.
#[derive(Args, Debug)]
pub struct MasksArgs {
    /// Number of regulatory units in the ring.
    #[arg(long, short = 'n')]
    pub ring_size: usize,

    /// Mask as a string of 0/1 units. Repeat for several masks.
    #[arg(long = "mask", required = true)]
    pub masks: Vec<String>,

    /// Write per-unit `uncovered` columns instead of `matches` columns.
    #[arg(long)]
    pub uncovered: bool,

    /// Output directory (defaults to the configured output directory).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Parse a mask and check it spans the whole ring.
pub fn parse_mask(text: &str, ring_size: usize) -> Result<RingConfiguration> {
    let config = RingConfiguration::parse(text).with_context(|| format!("invalid mask {text:?}"))?;
    if config.len() != ring_size {
        return Err(ConfigurationError::LengthMismatch {
            expected: ring_size,
            actual: config.len(),
        })
        .with_context(|| format!("invalid mask {text:?}"));
    }
    Ok(config)
}

/// Membership of every state of `chain` in `mask`, in state order.
pub fn membership(chain: &MarkovChain, mask: &RingConfiguration) -> Result<Vec<bool>> {
    chain
        .states
        .iter()
        .map(|s| mask::matches(mask, s.id.configuration()).map_err(Into::into))
        .collect()
}

/// Whether each state of `chain`, in state order, leaves a unit of `mask` uncovered.
pub fn uncovered_membership(chain: &MarkovChain, mask: &RingConfiguration) -> Result<Vec<bool>> {
    chain
        .states
        .iter()
        .map(|s| mask::uncovered(mask, s.id.configuration()).map_err(Into::into))
        .collect()
}

/// Execute the masks subcommand.
pub fn run_masks(args: &MasksArgs, default_dir: &std::path::Path) -> Result<u8> {
    let masks = args
        .masks
        .iter()
        .map(|m| parse_mask(m, args.ring_size))
        .collect::<Result<Vec<_>>>()?;

    let chain = MarkovChain::generate(args.ring_size)
        .with_context(|| format!("chain generation failed for ring size {}", args.ring_size))?;
    let dir = args.out.as_deref().unwrap_or(default_dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let stem = if args.uncovered { "uncovered" } else { "matches" };
    for (k, mask) in masks.iter().enumerate() {
        let column = if args.uncovered {
            uncovered_membership(&chain, mask)?
        } else {
            membership(&chain, mask)?
        };
        let hits = column.iter().filter(|m| **m).count();
        let path = write_mask_column(dir, stem, args.ring_size, k + 1, &column)?;
        tracing::info!(mask = %mask, hits, path = %path.display(), "wrote mask column");
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mask_checks_length_and_alphabet() {
        assert!(parse_mask("0110", 4).is_ok());
        let short = parse_mask("011", 4).unwrap_err();
        assert!(format!("{short:#}").contains("expected 4 units, got 3"));
        assert!(parse_mask("01x0", 4).is_err());
    }

    #[test]
    fn adjacent_pair_membership_for_four_units() {
        // States: 0000, 0001, 0011, 0111, 1111, 0101.
        let chain = MarkovChain::generate(4).unwrap();
        let mask = parse_mask("1100", 4).unwrap();
        assert_eq!(
            membership(&chain, &mask).unwrap(),
            vec![false, false, true, true, true, false]
        );
    }

    #[test]
    fn run_writes_one_file_per_mask() {
        let dir = tempfile::tempdir().unwrap();
        let args = MasksArgs {
            ring_size: 4,
            masks: vec!["1000".into(), "1010".into()],
            uncovered: false,
            out: Some(dir.path().to_path_buf()),
        };
        assert_eq!(run_masks(&args, std::path::Path::new("unused")).unwrap(), 0);
        let first = std::fs::read_to_string(dir.path().join("matches4_mdex1.txt")).unwrap();
        assert_eq!(first, "0\n1\n1\n1\n1\n1\n");
        let second = std::fs::read_to_string(dir.path().join("matches4_mdex2.txt")).unwrap();
        assert_eq!(second, "0\n0\n0\n1\n1\n1\n");
    }

    #[test]
    fn uncovered_compares_ids_unit_by_unit() {
        // States: 0000, 0001, 0011, 0111, 1111, 0101.
        let chain = MarkovChain::generate(4).unwrap();
        let mask = parse_mask("0011", 4).unwrap();
        assert_eq!(
            uncovered_membership(&chain, &mask).unwrap(),
            vec![true, true, false, false, false, true]
        );
        let empty = parse_mask("0000", 4).unwrap();
        assert!(uncovered_membership(&chain, &empty).unwrap().iter().all(|u| *u));
    }

    #[test]
    fn run_uncovered_writes_uncovered_columns() {
        let dir = tempfile::tempdir().unwrap();
        let args = MasksArgs {
            ring_size: 4,
            masks: vec!["0001".into()],
            uncovered: true,
            out: Some(dir.path().to_path_buf()),
        };
        assert_eq!(run_masks(&args, std::path::Path::new("unused")).unwrap(), 0);
        let column = std::fs::read_to_string(dir.path().join("uncovered4_mdex1.txt")).unwrap();
        assert_eq!(column, "1\n0\n0\n0\n0\n0\n");
        assert!(!dir.path().join("matches4_mdex1.txt").exists());
    }
}
