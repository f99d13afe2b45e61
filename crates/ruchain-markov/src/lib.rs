//! # ruchain-markov — Cyclic Regulatory-Unit Chain Generator
//!
//! Enumerates the distinct states and transitions of the Markov chain for
//! N regulatory units arranged in a ring, where configurations related by
//! rotation or reflection are one state.
//!
//! ## Components
//!
//! - **Registry** (`registry.rs`): discovery-ordered arena of canonical
//!   states, addressed by index.
//!
//! - **Classifier** (`classify.rs`): neighbour-context class of a
//!   single-unit move.
//!
//! - **Walker** (`walker.rs`): depth-first traversal in one direction,
//!   parameterized by the [`Activation`] / [`Deactivation`] marker types.
//!
//! - **Chain** (`chain.rs`): runs both passes and pairs each forward
//!   transition with its reverse partner.
//!
//! - **Tables** (`tables.rs`): the 1-based, column-oriented sequences
//!   handed to equation assembly.
//!
//! ## Usage
//!
//! ```
//! use ruchain_markov::{ChainTables, MarkovChain};
//!
//! let chain = MarkovChain::generate(3).unwrap();
//! let tables = ChainTables::from(&chain);
//! assert_eq!(tables.mask_ids, vec!["000", "001", "011", "111"]);
//! assert_eq!(tables.m, vec![3, 2, 1]);
//! assert_eq!(tables.n, vec![1, 2, 3]);
//! ```

pub mod chain;
pub mod classify;
pub mod registry;
pub mod tables;
pub mod walker;

pub use chain::{merge, ChainTransition, MarkovChain, State};
pub use classify::{classify, neighbor_score, BINDING_OFFSET};
pub use registry::StateRegistry;
pub use tables::ChainTables;
pub use walker::{
    Activation, Deactivation, Direction, TransitionKey, TransitionTable, Traversal, Walk,
    WalkTransition,
};
