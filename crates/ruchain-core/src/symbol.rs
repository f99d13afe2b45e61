//! # Unit Symbols
//!
//! The alphabet a single regulatory unit can take. The chain generator
//! only ever produces `Inactive` and `Active`; `Bound` is reserved for
//! the cross-bridge binding variant and exists so the code paths that
//! would handle it are checked by the compiler instead of string-matched.

use serde::{Deserialize, Serialize};

/// State of one regulatory unit.
///
/// Ordering follows the ordinal (`Inactive < Active < Bound`), which is
/// also the order used when comparing canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Unit is off.
    Inactive,
    /// Unit is on.
    Active,
    /// Unit is on with a bound cross-bridge (reserved).
    Bound,
}

/// Every symbol, in ordinal order.
pub const ALL_SYMBOLS: [Symbol; 3] = [Symbol::Inactive, Symbol::Active, Symbol::Bound];

impl Symbol {
    /// Ordinal value (`0`, `1`, `2`).
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
            Self::Bound => 2,
        }
    }

    /// Inverse of [`Symbol::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        ALL_SYMBOLS.get(usize::from(ordinal)).copied()
    }

    /// Single-character rendering used in canonical ids.
    pub fn as_char(self) -> char {
        match self {
            Self::Inactive => '0',
            Self::Active => '1',
            Self::Bound => '2',
        }
    }

    /// Parse the single-character rendering.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_ordinal)
    }

    /// Whether the unit counts toward the degree of activation.
    pub fn is_on(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
