//! # Canonical Naming — Dihedral Orbit Representatives
//!
//! Every ring configuration belongs to an orbit under the dihedral group
//! of the cycle (all rotations, plus all rotations of the reversal). The
//! [`CanonicalId`] of a configuration is the lexicographically smallest
//! member of that orbit, compared symbol by symbol.
//!
//! ## Invariants
//!
//! - Canonicalization is a function: each configuration has exactly one
//!   canonical id, and configurations related by any rotation or
//!   reflection share it.
//! - `CanonicalId` has a private inner field. The only constructors go
//!   through [`canonical_form`], so a `CanonicalId` that is not an orbit
//!   minimum cannot exist.
//!
//! ## Name Table
//!
//! [`Datamap`] precomputes the canonical id of all 2^N binary
//! configurations of a ring size once, so traversal only does indexed
//! lookups.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, ConsistencyError};
use crate::ring::RingConfiguration;

/// Smallest supported ring size.
pub const MIN_RING_SIZE: usize = 1;

/// Largest supported ring size. The name table holds 2^N entries.
pub const MAX_RING_SIZE: usize = 20;

/// Reject ring sizes the name table cannot be built for.
pub fn validate_ring_size(size: usize) -> Result<(), ConfigurationError> {
    if (MIN_RING_SIZE..=MAX_RING_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigurationError::RingSizeOutOfRange {
            size,
            min: MIN_RING_SIZE,
            max: MAX_RING_SIZE,
        })
    }
}

/// The orbit minimum of `config` under rotation and reflection.
///
/// Uniform rings have no pivot to rotate around and are fixed points.
pub fn canonical_form(config: &RingConfiguration) -> RingConfiguration {
    if config.is_uniform() {
        return config.clone();
    }
    // The minimum must open with the smallest symbol present, so only
    // rotations starting at a unit holding it are candidates.
    let pivot = match config.symbols().iter().min() {
        Some(s) => *s,
        None => return config.clone(),
    };
    let reversed = config.reversed();
    config
        .positions_of(pivot)
        .map(|p| config.rotated(p))
        .chain(reversed.positions_of(pivot).map(|p| reversed.rotated(p)))
        .min()
        .unwrap_or_else(|| config.clone())
}

/// Symmetry-class representative of a ring configuration.
///
/// Orders lexicographically by symbol, which matches ordering of the
/// rendered `0`/`1`/`2` strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalId(RingConfiguration);

impl CanonicalId {
    /// Canonical id of an arbitrary configuration.
    pub fn of(config: &RingConfiguration) -> Self {
        Self(canonical_form(config))
    }

    /// The representative configuration.
    pub fn configuration(&self) -> &RingConfiguration {
        &self.0
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the id names an empty ring.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CanonicalId> for String {
    fn from(id: CanonicalId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CanonicalId {
    type Error = String;

    /// Accepts only text that is already an orbit minimum.
    fn try_from(text: String) -> Result<Self, Self::Error> {
        let config = RingConfiguration::parse(&text).map_err(|e| e.to_string())?;
        let id = Self::of(&config);
        if id.0 == config {
            Ok(id)
        } else {
            Err(format!("{text} is not canonical (representative is {id})"))
        }
    }
}

/// Canonical ids of every binary configuration of one ring size.
///
/// Indexed by the configuration's bit encoding
/// (see [`RingConfiguration::to_bits`]).
#[derive(Debug, Clone)]
pub struct Datamap {
    ring_size: usize,
    names: Vec<CanonicalId>,
}

impl Datamap {
    /// Build the table for `ring_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RingSizeOutOfRange`] outside
    /// `MIN_RING_SIZE..=MAX_RING_SIZE`.
    pub fn build(ring_size: usize) -> Result<Self, ConfigurationError> {
        validate_ring_size(ring_size)?;
        let names = (0..1u32 << ring_size)
            .map(|bits| CanonicalId::of(&RingConfiguration::from_bits(bits, ring_size)))
            .collect();
        Ok(Self { ring_size, names })
    }

    /// Ring size the table was built for.
    pub fn ring_size(&self) -> usize {
        self.ring_size
    }

    /// Number of raw configurations covered (2^N).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a built table.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up the canonical id of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::UnnamedConfiguration`] if `config` has
    /// the wrong length or holds a symbol outside the binary alphabet.
    pub fn name(&self, config: &RingConfiguration) -> Result<&CanonicalId, ConsistencyError> {
        let unnamed = || ConsistencyError::UnnamedConfiguration {
            config: config.to_string(),
            ring_size: self.ring_size,
        };
        if config.len() != self.ring_size {
            return Err(unnamed());
        }
        let bits = config.to_bits().ok_or_else(unnamed)?;
        self.names.get(bits as usize).ok_or_else(unnamed)
    }

    /// Distinct canonical ids in ascending order.
    pub fn classes(&self) -> Vec<&CanonicalId> {
        let mut classes: Vec<&CanonicalId> = self.names.iter().collect();
        classes.sort();
        classes.dedup();
        classes
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn binary_ring() -> impl Strategy<Value = RingConfiguration> {
        (1usize..=10).prop_flat_map(|n| {
            (0u32..(1u32 << n)).prop_map(move |bits| RingConfiguration::from_bits(bits, n))
        })
    }

    proptest! {
        /// Canonicalizing a canonical form changes nothing.
        #[test]
        fn canonical_form_is_idempotent(config in binary_ring()) {
            let once = canonical_form(&config);
            prop_assert_eq!(canonical_form(&once), once);
        }

        /// Every rotation and reflection shares the canonical id.
        #[test]
        fn canonical_form_is_symmetry_invariant(config in binary_ring(), k in 0usize..10) {
            let expected = CanonicalId::of(&config);
            let k = k % config.len();
            prop_assert_eq!(&CanonicalId::of(&config.rotated(k)), &expected);
            prop_assert_eq!(&CanonicalId::of(&config.reversed().rotated(k)), &expected);
        }

        /// The canonical id is no larger than any orbit member.
        #[test]
        fn canonical_form_is_orbit_minimum(config in binary_ring()) {
            let canon = canonical_form(&config);
            for k in 0..config.len() {
                prop_assert!(canon <= config.rotated(k));
                prop_assert!(canon <= config.reversed().rotated(k));
            }
        }
    }
}
