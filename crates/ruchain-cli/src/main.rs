//! # ruchain CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ruchain_cli::config::GeneratorConfig;
use ruchain_cli::generate::{run_generate, GenerateArgs};
use ruchain_cli::masks::{run_masks, MasksArgs};
use ruchain_cli::show::{run_show, ShowArgs};

/// Regulatory-unit chain generator.
///
/// Enumerates the symmetry-reduced states and transitions of the Markov
/// chain for N cooperative regulatory units on a ring, and writes the
/// tables consumed by equation assembly.
#[derive(Parser, Debug)]
#[command(name = "ruchain", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate state/transition tables for a range of ring sizes.
    Generate(GenerateArgs),

    /// Print the states and transitions of one chain.
    Show(ShowArgs),

    /// Write mask membership columns for one chain.
    Masks(MasksArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("ruchain CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = GeneratorConfig::load_or_default(cli.config.as_deref()).and_then(|config| {
        match &cli.command {
            Commands::Generate(args) => run_generate(args, &config),
            Commands::Show(args) => run_show(args),
            Commands::Masks(args) => run_masks(args, &config.output_dir),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["ruchain", "generate"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        if let Commands::Generate(args) = cli.command {
            assert!(args.ring_size.is_none());
            assert!(args.min.is_none());
            assert!(args.max.is_none());
            assert!(args.out.is_none());
            assert!(args.format.is_none());
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_generate_range_and_format() {
        let cli = Cli::try_parse_from([
            "ruchain", "generate", "--min", "4", "--max", "9", "--format", "json", "--out", "tables",
        ])
        .unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.min, Some(4));
            assert_eq!(args.max, Some(9));
            assert_eq!(args.format, Some(ruchain_cli::config::OutputFormat::Json));
            assert_eq!(args.out, Some(PathBuf::from("tables")));
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_ring_size_conflicts_with_range() {
        let result = Cli::try_parse_from(["ruchain", "generate", "-n", "5", "--min", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_show() {
        let cli = Cli::try_parse_from(["ruchain", "show", "6"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.ring_size, 6);
        } else {
            panic!("expected show");
        }
    }

    #[test]
    fn cli_parse_masks_repeated() {
        let cli = Cli::try_parse_from([
            "ruchain", "masks", "-n", "4", "--mask", "1100", "--mask", "1010",
        ])
        .unwrap();
        if let Commands::Masks(args) = cli.command {
            assert_eq!(args.ring_size, 4);
            assert_eq!(args.masks, vec!["1100", "1010"]);
            assert!(!args.uncovered);
            assert!(args.out.is_none());
        } else {
            panic!("expected masks");
        }
    }

    #[test]
    fn cli_parse_masks_uncovered() {
        let cli =
            Cli::try_parse_from(["ruchain", "masks", "-n", "4", "--mask", "0011", "--uncovered"])
                .unwrap();
        if let Commands::Masks(args) = cli.command {
            assert!(args.uncovered);
        } else {
            panic!("expected masks");
        }
    }

    #[test]
    fn cli_masks_requires_a_mask() {
        assert!(Cli::try_parse_from(["ruchain", "masks", "-n", "4"]).is_err());
    }

    #[test]
    fn cli_parse_global_options() {
        let cli =
            Cli::try_parse_from(["ruchain", "-vv", "--config", "ruchain.yaml", "show", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ruchain.yaml")));
    }
}
