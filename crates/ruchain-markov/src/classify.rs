//! # Transition Classifier
//!
//! Buckets a single-unit move by the activation of the two units next to
//! it. Activation is cooperative, so the rate of a move depends on how
//! many neighbours are already on; downstream assembly keys its rate
//! constants on the bucket returned here.
//!
//! ```text
//! score(Inactive) = 0   score(Active) = 1   score(Bound) = 3
//! class = score(prev) + score(next)  [+ 10 if the unit becomes Bound]
//! ```
//!
//! Only the first two scores occur for chains built from the binary
//! alphabet, so classes are `0`, `1` or `2`.

use ruchain_core::{RingConfiguration, Symbol};

/// Added to the class of a move that binds a cross-bridge.
pub const BINDING_OFFSET: u32 = 10;

/// Contribution of one neighbour to the class.
pub fn neighbor_score(symbol: Symbol) -> u32 {
    match symbol {
        Symbol::Inactive | Symbol::Active => u32::from(symbol.ordinal()),
        Symbol::Bound => u32::from(symbol.ordinal()) + 1,
    }
}

/// Class of the move that sets `position` of `pre` to `new_symbol`.
///
/// `pre` is the configuration before the move; the moving unit itself
/// does not contribute.
pub fn classify(pre: &RingConfiguration, position: usize, new_symbol: Symbol) -> u32 {
    let (prev, next) = pre.neighbors(position);
    let class = neighbor_score(prev) + neighbor_score(next);
    match new_symbol {
        Symbol::Bound => class + BINDING_OFFSET,
        Symbol::Inactive | Symbol::Active => class,
    }
}
