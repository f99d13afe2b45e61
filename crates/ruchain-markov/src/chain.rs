//! # Chain Merger
//!
//! Builds the complete chain for one ring size: walks forward from the
//! all-inactive ring, walks in reverse from the all-active ring, and
//! pairs each forward transition `(s, p)` with the reverse transition
//! `(p, s)` so every edge carries both multiplicities.
//!
//! ## Output Ordering
//!
//! States keep the forward pass's discovery order. Transitions are sorted
//! by their forward discovery order `j`, which is the only ordering
//! visible to consumers of the tables.

use serde::{Deserialize, Serialize};

use ruchain_core::{CanonicalId, ChainError, ConsistencyError, Datamap, Symbol};

use crate::walker::{Activation, Deactivation, Traversal, Walk};

/// A canonical state of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Canonical id (unique key).
    pub id: CanonicalId,
    /// Forward discovery rank, 0-based.
    pub index: usize,
    /// Fraction of units that are on.
    pub alpha: f64,
    /// Fraction of units that are bound (always 0 for binary chains).
    pub beta: f64,
}

impl State {
    /// Derive the state attributes from its id.
    pub fn new(id: CanonicalId, index: usize) -> Self {
        let config = id.configuration();
        let units = config.len() as f64;
        let alpha = config.count_on() as f64 / units;
        let beta = config.count(Symbol::Bound) as f64 / units;
        Self {
            id,
            index,
            alpha,
            beta,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<state: {}, alpha={:.2}, beta={:.2}>",
            self.id, self.alpha, self.beta
        )
    }
}

/// A forward transition annotated with its reverse multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTransition {
    /// Source state.
    pub from: CanonicalId,
    /// Target state.
    pub to: CanonicalId,
    /// Forward multiplicity: raw activation moves from `from` onto `to`.
    pub m: u32,
    /// Reverse multiplicity: raw deactivation moves from `to` onto `from`.
    pub n: u32,
    /// Index of `from`, 0-based.
    pub i_pre: usize,
    /// Index of `to`, 0-based.
    pub i_post: usize,
    /// Neighbour-context class.
    pub trans_type: u32,
    /// Forward discovery order.
    pub j: usize,
}

impl std::fmt::Display for ChainTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<transition: m = {}, n = {}, iPre = {}, iPost = {}, transType = {}>",
            self.m, self.n, self.i_pre, self.i_post, self.trans_type
        )
    }
}

fn require_mirrored(what: &'static str, forward: usize, reverse: usize) -> Result<(), ConsistencyError> {
    if forward == reverse {
        Ok(())
    } else {
        Err(ConsistencyError::PassMismatch {
            what,
            forward,
            reverse,
        })
    }
}

/// Pair every forward transition with its mirror in the reverse pass.
///
/// The result is sorted by forward discovery order. Equal transition
/// counts plus a partner for every forward pair means no reverse
/// transition is left unpaired.
///
/// # Errors
///
/// Returns [`ConsistencyError::PassMismatch`] if the passes reached
/// different numbers of states or transitions, and
/// [`ConsistencyError::MissingReversePartner`] for the first forward
/// transition whose swapped pair is absent from `reverse`.
pub fn merge(forward: &Traversal, reverse: &Traversal) -> Result<Vec<ChainTransition>, ConsistencyError> {
    require_mirrored("states", forward.states.len(), reverse.states.len())?;
    require_mirrored(
        "transitions",
        forward.transitions.len(),
        reverse.transitions.len(),
    )?;
    let mut merged = forward
        .transitions
        .iter()
        .map(|(key, t)| {
            let partner = reverse.transitions.get(&key.reversed()).ok_or_else(|| {
                ConsistencyError::MissingReversePartner {
                    from: key.from.to_string(),
                    to: key.to.to_string(),
                }
            })?;
            Ok(ChainTransition {
                from: key.from.clone(),
                to: key.to.clone(),
                m: t.m,
                n: partner.m,
                i_pre: t.i_pre,
                i_post: t.i_post,
                trans_type: t.trans_type,
                j: t.j,
            })
        })
        .collect::<Result<Vec<_>, ConsistencyError>>()?;
    merged.sort_by_key(|t| t.j);
    Ok(merged)
}

/// The merged state graph for one ring size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkovChain {
    /// Number of regulatory units in the ring.
    pub ring_size: usize,
    /// States in forward discovery order.
    pub states: Vec<State>,
    /// Transitions in forward discovery order.
    pub transitions: Vec<ChainTransition>,
}

impl MarkovChain {
    /// Build the name table for `ring_size` and generate the chain.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported ring size and a
    /// consistency error if the two passes disagree.
    pub fn generate(ring_size: usize) -> Result<Self, ChainError> {
        let datamap = Datamap::build(ring_size)?;
        Self::from_datamap(&datamap)
    }

    /// Generate the chain from an existing name table.
    pub fn from_datamap(datamap: &Datamap) -> Result<Self, ChainError> {
        let forward = Walk::<Activation>::run(datamap)?;
        let reverse = Walk::<Deactivation>::run(datamap)?;

        let transitions = merge(&forward, &reverse)?;
        let states = forward
            .states
            .into_ids()
            .into_iter()
            .enumerate()
            .map(|(index, id)| State::new(id, index))
            .collect::<Vec<_>>();

        tracing::info!(
            ring_size = datamap.ring_size(),
            states = states.len(),
            transitions = transitions.len(),
            "chain generated"
        );

        Ok(Self {
            ring_size: datamap.ring_size(),
            states,
            transitions,
        })
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// State by 0-based index.
    pub fn state(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }
}
