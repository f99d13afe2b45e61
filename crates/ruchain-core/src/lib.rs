//! # ruchain-core — Foundational Types for Regulatory-Unit Chains
//!
//! This crate is the bedrock of the workspace. It defines the primitives
//! the chain generator is built from. Every other crate depends on
//! `ruchain-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Enumerated alphabet.** A unit is a [`Symbol`], not a character.
//!    The reserved `Bound` symbol is a variant every `match` must handle.
//!
//! 2. **`CanonicalId` newtype.** The only way to obtain one is through
//!    [`canonical::canonical_form`], so every id in the system is an
//!    orbit minimum under rotation and reflection.
//!
//! 3. **Precomputed names.** [`Datamap`] holds the canonical id of every
//!    binary configuration of one ring size. Traversal never canonicalizes
//!    on the fly.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ruchain-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod mask;
pub mod ring;
pub mod symbol;

// Re-export primary types for ergonomic imports.
pub use canonical::{
    canonical_form, validate_ring_size, CanonicalId, Datamap, MAX_RING_SIZE, MIN_RING_SIZE,
};
pub use error::{ChainError, ConfigurationError, ConsistencyError};
pub use ring::{changed_position, RingConfiguration};
pub use symbol::Symbol;
