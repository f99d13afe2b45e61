//! # ruchain-cli — Command-Line Driver for the Chain Generator
//!
//! Provides the `ruchain` command-line interface: generates the
//! state/transition tables for a range of ring sizes and writes them in
//! the layout equation assembly reads.
//!
//! ## Subcommands
//!
//! - `ruchain generate` — tables for every ring size in a range.
//! - `ruchain show` — human-readable listing of one chain.
//! - `ruchain masks` — mask membership columns over the states of one chain.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from chain construction.
//! - Handler functions delegate to `ruchain-markov`; no chain logic here.
//! - All file I/O lives in this crate.

pub mod config;
pub mod generate;
pub mod masks;
pub mod output;
pub mod show;

