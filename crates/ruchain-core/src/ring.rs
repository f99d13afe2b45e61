//! # Ring Configurations
//!
//! A [`RingConfiguration`] is an ordered assignment of [`Symbol`]s to the N
//! regulatory units of a ring. Position `N - 1` is adjacent to position
//! `0`. Configurations are ephemeral: they are produced while generating
//! moves and canonical names, then dropped.
//!
//! Binary configurations (no `Bound` units) have a compact integer
//! encoding where position 0 is the most significant bit, so that
//! `from_bits(0b001, 3)` renders as `"001"`.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, ConsistencyError};
use crate::symbol::Symbol;

/// Symbols of all units around the ring, in position order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RingConfiguration(Vec<Symbol>);

impl RingConfiguration {
    /// Wrap a symbol sequence.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// A ring of `size` units all holding `symbol`.
    pub fn uniform(size: usize, symbol: Symbol) -> Self {
        Self(vec![symbol; size])
    }

    /// Decode the binary integer encoding (position 0 = most significant bit).
    pub fn from_bits(bits: u32, size: usize) -> Self {
        let symbols = (0..size)
            .map(|i| {
                if (bits >> (size - 1 - i)) & 1 == 1 {
                    Symbol::Active
                } else {
                    Symbol::Inactive
                }
            })
            .collect();
        Self(symbols)
    }

    /// Binary integer encoding, or `None` if any unit is `Bound`.
    pub fn to_bits(&self) -> Option<u32> {
        self.0.iter().try_fold(0u32, |acc, s| match s {
            Symbol::Inactive => Some(acc << 1),
            Symbol::Active => Some((acc << 1) | 1),
            Symbol::Bound => None,
        })
    }

    /// Parse a string of `0`/`1`/`2` characters.
    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                Symbol::from_char(c).ok_or_else(|| ConfigurationError::InvalidSymbol {
                    text: text.to_string(),
                    position,
                    symbol: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of units in the ring.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ring has no units.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols in position order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Symbol at `position`.
    pub fn get(&self, position: usize) -> Option<Symbol> {
        self.0.get(position).copied()
    }

    /// Copy of this configuration with `position` set to `symbol`.
    pub fn with(&self, position: usize, symbol: Symbol) -> Self {
        let mut symbols = self.0.clone();
        symbols[position] = symbol;
        Self(symbols)
    }

    /// Rotation that starts at `start`.
    pub fn rotated(&self, start: usize) -> Self {
        let mut symbols = self.0.clone();
        symbols.rotate_left(start);
        Self(symbols)
    }

    /// Positional reversal.
    pub fn reversed(&self) -> Self {
        let mut symbols = self.0.clone();
        symbols.reverse();
        Self(symbols)
    }

    /// The two cyclic neighbours of `position`: `(previous, next)`.
    ///
    /// In a one-unit ring both neighbours are the unit itself.
    pub fn neighbors(&self, position: usize) -> (Symbol, Symbol) {
        let n = self.0.len();
        let prev = self.0[(position + n - 1) % n];
        let next = self.0[(position + 1) % n];
        (prev, next)
    }

    /// How many units hold `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|s| **s == symbol).count()
    }

    /// How many units are on (`Active` or `Bound`).
    pub fn count_on(&self) -> usize {
        self.0.iter().filter(|s| s.is_on()).count()
    }

    /// Whether every unit holds the same symbol.
    pub fn is_uniform(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }

    /// Positions holding `symbol`, ascending.
    pub fn positions_of(&self, symbol: Symbol) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == symbol)
            .map(|(i, _)| i)
    }
}

impl std::fmt::Display for RingConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in &self.0 {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Locate the single unit that differs between two adjacent configurations.
///
/// Returns the position and the symbol it holds in `post`.
///
/// # Errors
///
/// Returns [`ConsistencyError::LengthMismatch`] if the rings differ in size
/// and [`ConsistencyError::NotAdjacent`] unless exactly one position differs.
pub fn changed_position(
    pre: &RingConfiguration,
    post: &RingConfiguration,
) -> Result<(usize, Symbol), ConsistencyError> {
    if pre.len() != post.len() {
        return Err(ConsistencyError::LengthMismatch {
            left: pre.to_string(),
            right: post.to_string(),
        });
    }
    let diffs: Vec<usize> = pre
        .symbols()
        .iter()
        .zip(post.symbols())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect();
    match diffs.as_slice() {
        [position] => Ok((*position, post.symbols()[*position])),
        _ => Err(ConsistencyError::NotAdjacent {
            pre: pre.to_string(),
            post: post.to_string(),
            count: diffs.len(),
        }),
    }
}
