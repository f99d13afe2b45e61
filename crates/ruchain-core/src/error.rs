//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by every crate in the workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Chain generation is deterministic and total over a finite domain, so
//! there is no recoverable failure mode. Errors fall into two families:
//!
//! - **Configuration** errors are raised before any traversal starts
//!   (ring size out of range, malformed configuration text).
//! - **Consistency** errors mean an internal invariant broke during
//!   canonicalization, traversal, or merge. They abort the run for the
//!   ring size being generated.

use thiserror::Error;

/// Top-level error type for chain generation.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Input rejected before generation started.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// An invariant of the generated chain was violated.
    #[error("consistency error: {0}")]
    Consistency(#[from] ConsistencyError),
}

/// Input rejected before any canonicalization or traversal work.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Ring size outside the supported range.
    #[error("ring size {size} is outside the supported range {min}..={max}")]
    RingSizeOutOfRange {
        /// Requested ring size.
        size: usize,
        /// Smallest supported ring size.
        min: usize,
        /// Largest supported ring size.
        max: usize,
    },

    /// A configuration string contained a character outside the alphabet.
    #[error("invalid symbol {symbol:?} at position {position} in {text:?}")]
    InvalidSymbol {
        /// The offending text.
        text: String,
        /// Position of the bad character.
        position: usize,
        /// The bad character.
        symbol: char,
    },

    /// A mask or configuration length does not match the ring size.
    #[error("expected {expected} units, got {actual}")]
    LengthMismatch {
        /// Ring size in effect.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

/// Internal invariant violation detected while building a chain.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// A forward transition has no mirror in the reverse pass.
    #[error("forward transition {from} -> {to} has no reverse partner {to} -> {from}")]
    MissingReversePartner {
        /// Source state of the forward transition.
        from: String,
        /// Target state of the forward transition.
        to: String,
    },

    /// The forward and reverse passes are not mirror images.
    #[error("forward pass has {forward} {what}, reverse pass has {reverse}")]
    PassMismatch {
        /// What was counted (`states` or `transitions`).
        what: &'static str,
        /// Count in the forward pass.
        forward: usize,
        /// Count in the reverse pass.
        reverse: usize,
    },

    /// A configuration could not be found in the precomputed name table.
    #[error("configuration {config} is not covered by the canonical name table for ring size {ring_size}")]
    UnnamedConfiguration {
        /// The configuration that failed lookup.
        config: String,
        /// Ring size of the name table.
        ring_size: usize,
    },

    /// Two configurations expected to differ in one unit differ in some other number.
    #[error("configurations {pre} and {post} differ in {count} positions, expected exactly one")]
    NotAdjacent {
        /// Configuration before the move.
        pre: String,
        /// Configuration after the move.
        post: String,
        /// Number of differing positions.
        count: usize,
    },

    /// Two configurations compared position-wise have different lengths.
    #[error("configurations {left} and {right} have different lengths")]
    LengthMismatch {
        /// Left-hand configuration.
        left: String,
        /// Right-hand configuration.
        right: String,
    },

    /// A state was appended to a registry that already holds it.
    #[error("state {id} is already registered at index {index}")]
    DuplicateState {
        /// The duplicated canonical id.
        id: String,
        /// Index already assigned to it.
        index: usize,
    },
}
