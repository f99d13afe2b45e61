//! # Activation Masks
//!
//! A mask is a ring configuration used as a pattern: its active units
//! name a set of regulatory units that must be on. Downstream equation
//! assembly uses masks to select the states in which a given local
//! pattern of activation occurs anywhere around the ring.
//!
//! These helpers operate on raw configurations and never depend on a
//! name table.

use crate::error::ConsistencyError;
use crate::ring::RingConfiguration;
use crate::symbol::Symbol;

fn require_same_len(
    left: &RingConfiguration,
    right: &RingConfiguration,
) -> Result<(), ConsistencyError> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(ConsistencyError::LengthMismatch {
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}

/// Treat bound units as plainly active.
pub fn collapse_bound(config: &RingConfiguration) -> RingConfiguration {
    RingConfiguration::new(
        config
            .symbols()
            .iter()
            .map(|s| match s {
                Symbol::Bound => Symbol::Active,
                other => *other,
            })
            .collect(),
    )
}

/// Rotate `mask` so it starts at its first active unit.
///
/// Returns `None` when no unit is active.
pub fn pivot(mask: &RingConfiguration) -> Option<RingConfiguration> {
    mask.positions_of(Symbol::Active)
        .next()
        .map(|start| mask.rotated(start))
}

/// Whether every active unit of `mask` is active in `target`.
fn covers(mask: &RingConfiguration, target: &RingConfiguration) -> bool {
    mask.symbols()
        .iter()
        .zip(target.symbols())
        .all(|(m, t)| !m.is_on() || t.is_on())
}

/// Whether some pivoted rotation or reflection of `target` covers `mask`.
///
/// `mask` is first rotated to its [`pivot`], then each rotation of
/// `target` (and of its reversal) that starts on an active unit is tried
/// against it. An all-inactive mask is compared as given.
///
/// # Errors
///
/// Returns [`ConsistencyError::LengthMismatch`] if the rings differ in size.
pub fn matches(mask: &RingConfiguration, target: &RingConfiguration) -> Result<bool, ConsistencyError> {
    require_same_len(mask, target)?;
    let target_on = target.count_on();
    if target_on < mask.count_on() {
        return Ok(false);
    }
    if target_on == target.len() {
        return Ok(true);
    }
    let aligned = pivot(mask).unwrap_or_else(|| mask.clone());
    let reversed = target.reversed();
    let hit = target
        .positions_of(Symbol::Active)
        .map(|p| target.rotated(p))
        .chain(reversed.positions_of(Symbol::Active).map(|p| reversed.rotated(p)))
        .any(|variation| covers(&aligned, &variation));
    Ok(hit)
}

/// Whether `id` leaves some active unit of `mask` uncovered.
///
/// An all-inactive mask is always reported as uncovered. Bound units in
/// `id` count as active.
///
/// # Errors
///
/// Returns [`ConsistencyError::LengthMismatch`] if the rings differ in size.
pub fn uncovered(mask: &RingConfiguration, id: &RingConfiguration) -> Result<bool, ConsistencyError> {
    require_same_len(mask, id)?;
    if mask.count_on() == 0 {
        return Ok(true);
    }
    Ok(!covers(mask, &collapse_bound(id)))
}
