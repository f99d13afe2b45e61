//! # Chain Walker
//!
//! Depth-first discovery of the canonical state graph reachable from a
//! uniform root, moving one unit at a time in a single direction.
//!
//! ## Directions
//!
//! The direction is a type parameter, following the sealed marker-trait
//! pattern used for lifecycle states elsewhere in the stack:
//!
//! - [`Activation`] — forward pass from the all-inactive root, `0 → 1` moves.
//! - [`Deactivation`] — reverse pass from the all-active root, `1 → 0` moves.
//!
//! ## Algorithm
//!
//! At each visited configuration, every unit holding the direction's
//! source symbol is flipped in turn and the result is named through the
//! [`Datamap`]. Then:
//!
//! 1. An unseen target is registered, a transition is created, and the
//!    walk descends into the flipped configuration.
//! 2. A seen target without a transition from the current state gets a new
//!    transition but is not re-explored.
//! 3. A pair that already has a transition has its multiplicity `m`
//!    incremented.
//!
//! Each move changes the number of active units by one, so recursion depth
//! is bounded by the ring size.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use ruchain_core::{changed_position, CanonicalId, ChainError, Datamap, RingConfiguration, Symbol};

use crate::classify::classify;
use crate::registry::StateRegistry;

// ─── Directions ──────────────────────────────────────────────────────

/// Forward pass: units switch on.
#[derive(Debug, Clone, Copy)]
pub struct Activation;

/// Reverse pass: units switch off.
#[derive(Debug, Clone, Copy)]
pub struct Deactivation;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Activation {}
    impl Sealed for super::Deactivation {}
}

/// Marker trait for the two traversal directions.
///
/// Sealed — only [`Activation`] and [`Deactivation`] implement it.
pub trait Direction: private::Sealed + std::fmt::Debug {
    /// Symbol a unit must hold to be moved.
    const SOURCE: Symbol;
    /// Symbol a moved unit ends up holding.
    const TARGET: Symbol;

    /// Pass name used in logs (`"forward"` / `"reverse"`).
    fn name() -> &'static str;

    /// Uniform root configuration the pass starts from.
    fn root(ring_size: usize) -> RingConfiguration {
        RingConfiguration::uniform(ring_size, Self::SOURCE)
    }
}

impl Direction for Activation {
    const SOURCE: Symbol = Symbol::Inactive;
    const TARGET: Symbol = Symbol::Active;

    fn name() -> &'static str {
        "forward"
    }
}

impl Direction for Deactivation {
    const SOURCE: Symbol = Symbol::Active;
    const TARGET: Symbol = Symbol::Inactive;

    fn name() -> &'static str {
        "reverse"
    }
}

// ─── Transition Table ────────────────────────────────────────────────

/// Ordered pair of canonical endpoints identifying a transition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransitionKey {
    /// State the move starts from.
    pub from: CanonicalId,
    /// State the move lands in.
    pub to: CanonicalId,
}

impl TransitionKey {
    /// Key for `from -> to`.
    pub fn new(from: CanonicalId, to: CanonicalId) -> Self {
        Self { from, to }
    }

    /// Key for `to -> from`.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// A transition as recorded by one directional pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkTransition {
    /// Raw single-unit moves that collapse onto this pair.
    pub m: u32,
    /// Registry index of the source state.
    pub i_pre: usize,
    /// Registry index of the target state.
    pub i_post: usize,
    /// Neighbour-context class of the first move discovered.
    pub trans_type: u32,
    /// Discovery order across the whole pass.
    pub j: usize,
}

/// Transitions of one pass, keyed by endpoint pair.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    entries: BTreeMap<TransitionKey, WalkTransition>,
    next_order: usize,
}

impl TransitionTable {
    /// An empty table with the order counter at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition recorded for `key`.
    pub fn get(&self, key: &TransitionKey) -> Option<&WalkTransition> {
        self.entries.get(key)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey, &WalkTransition)> {
        self.entries.iter()
    }

    /// Count another move onto an existing pair. Returns false if the pair is new.
    fn bump(&mut self, key: &TransitionKey) -> bool {
        match self.entries.get_mut(key) {
            Some(t) => {
                t.m += 1;
                true
            }
            None => false,
        }
    }

    /// Create the transition for a pair seen for the first time.
    fn record(&mut self, key: TransitionKey, i_pre: usize, i_post: usize, trans_type: u32) {
        let j = self.next_order;
        self.next_order += 1;
        self.entries.insert(
            key,
            WalkTransition {
                m: 1,
                i_pre,
                i_post,
                trans_type,
                j,
            },
        );
    }
}

// ─── Walk ────────────────────────────────────────────────────────────

/// Result of one directional pass.
#[derive(Debug, Clone)]
pub struct Traversal {
    /// Pass name (`"forward"` / `"reverse"`).
    pub direction: &'static str,
    /// States in discovery order.
    pub states: StateRegistry,
    /// Transitions keyed by endpoint pair.
    pub transitions: TransitionTable,
}

/// Traversal context for one direction.
///
/// Built fresh for every pass; the registry and table it owns are handed
/// back in the [`Traversal`] and never shared with another pass.
#[derive(Debug)]
pub struct Walk<'a, D: Direction> {
    datamap: &'a Datamap,
    states: StateRegistry,
    transitions: TransitionTable,
    _direction: PhantomData<D>,
}

impl<'a, D: Direction> Walk<'a, D> {
    /// Walk the whole reachable graph from `D`'s root.
    ///
    /// # Errors
    ///
    /// Returns a consistency error if a configuration is missing from the
    /// name table, a move changes other than one unit, or the registry
    /// rejects a state.
    pub fn run(datamap: &'a Datamap) -> Result<Traversal, ChainError> {
        let mut walk = Self {
            datamap,
            states: StateRegistry::new(),
            transitions: TransitionTable::new(),
            _direction: PhantomData,
        };

        let root = D::root(datamap.ring_size());
        let root_id = datamap.name(&root)?.clone();
        let root_index = walk.states.append(root_id.clone())?;
        walk.visit(&root, &root_id, root_index)?;

        tracing::debug!(
            direction = D::name(),
            ring_size = datamap.ring_size(),
            states = walk.states.len(),
            transitions = walk.transitions.len(),
            "chain walk finished"
        );

        Ok(Traversal {
            direction: D::name(),
            states: walk.states,
            transitions: walk.transitions,
        })
    }

    fn visit(
        &mut self,
        config: &RingConfiguration,
        id: &CanonicalId,
        index: usize,
    ) -> Result<(), ChainError> {
        for position in config.positions_of(D::SOURCE) {
            let candidate = config.with(position, D::TARGET);
            let target = self.datamap.name(&candidate)?.clone();
            let key = TransitionKey::new(id.clone(), target.clone());

            let (target_index, discovered) = match self.states.index_of(&target) {
                Some(existing) => (existing, false),
                None => (self.states.append(target.clone())?, true),
            };

            if !discovered && self.transitions.bump(&key) {
                continue;
            }

            let (moved, symbol) = changed_position(config, &candidate)?;
            let trans_type = classify(config, moved, symbol);
            self.transitions.record(key, index, target_index, trans_type);

            if discovered {
                tracing::trace!(
                    direction = D::name(),
                    state = %target,
                    index = target_index,
                    "discovered state"
                );
                self.visit(&candidate, &target, target_index)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(text: &str) -> CanonicalId {
        CanonicalId::of(&RingConfiguration::parse(text).unwrap())
    }

    fn key(from: &str, to: &str) -> TransitionKey {
        TransitionKey::new(id(from), id(to))
    }

    #[test]
    fn roots_are_uniform() {
        assert_eq!(Activation::root(3).to_string(), "000");
        assert_eq!(Deactivation::root(4).to_string(), "1111");
    }

    #[test]
    fn forward_walk_of_three_units() {
        let map = Datamap::build(3).unwrap();
        let walk = Walk::<Activation>::run(&map).unwrap();

        assert_eq!(walk.direction, "forward");
        assert_eq!(walk.states.ids(), &[id("000"), id("001"), id("011"), id("111")]);
        assert_eq!(walk.transitions.len(), 3);

        let first = walk.transitions.get(&key("000", "001")).unwrap();
        assert_eq!((first.m, first.i_pre, first.i_post, first.trans_type, first.j), (3, 0, 1, 0, 0));
        let second = walk.transitions.get(&key("001", "011")).unwrap();
        assert_eq!((second.m, second.i_pre, second.i_post, second.trans_type, second.j), (2, 1, 2, 1, 1));
        let third = walk.transitions.get(&key("011", "111")).unwrap();
        assert_eq!((third.m, third.i_pre, third.i_post, third.trans_type, third.j), (1, 2, 3, 2, 2));
    }

    #[test]
    fn reverse_walk_of_three_units() {
        let map = Datamap::build(3).unwrap();
        let walk = Walk::<Deactivation>::run(&map).unwrap();

        assert_eq!(walk.direction, "reverse");
        assert_eq!(walk.states.ids(), &[id("111"), id("011"), id("001"), id("000")]);
        assert_eq!(walk.transitions.get(&key("111", "011")).unwrap().m, 3);
        assert_eq!(walk.transitions.get(&key("011", "001")).unwrap().m, 2);
        assert_eq!(walk.transitions.get(&key("001", "000")).unwrap().m, 1);
    }

    #[test]
    fn revisited_states_get_transitions_without_reexploration() {
        // In a four-unit ring 0111 is discovered below 0011, then reached
        // again from 0101 without descending a second time.
        let map = Datamap::build(4).unwrap();
        let walk = Walk::<Activation>::run(&map).unwrap();

        assert_eq!(walk.states.len(), 6);
        assert!(walk.transitions.get(&key("0011", "0111")).is_some());
        assert!(walk.transitions.get(&key("0101", "0111")).is_some());
        assert_eq!(walk.transitions.get(&key("0101", "0111")).unwrap().m, 2);
        assert_eq!(walk.transitions.get(&key("0011", "0111")).unwrap().m, 2);
        assert_eq!(walk.transitions.get(&key("0001", "0011")).unwrap().m, 2);
        assert_eq!(walk.transitions.get(&key("0001", "0101")).unwrap().m, 1);
    }

    #[test]
    fn multiplicities_sum_to_available_moves() {
        // Every state with k inactive units offers k activation moves.
        let map = Datamap::build(6).unwrap();
        let walk = Walk::<Activation>::run(&map).unwrap();
        for (index, state) in walk.states.ids().iter().enumerate() {
            let offered = state.configuration().count(Symbol::Inactive) as u32;
            let counted: u32 = walk
                .transitions
                .iter()
                .filter(|(_, t)| t.i_pre == index)
                .map(|(_, t)| t.m)
                .sum();
            assert_eq!(counted, offered, "state {state}");
        }
    }

    #[test]
    fn order_counter_has_no_gaps() {
        let map = Datamap::build(5).unwrap();
        let walk = Walk::<Activation>::run(&map).unwrap();
        let mut orders: Vec<usize> = walk.transitions.iter().map(|(_, t)| t.j).collect();
        orders.sort_unstable();
        assert_eq!(orders, (0..walk.transitions.len()).collect::<Vec<_>>());
    }

    #[test]
    fn passes_do_not_share_state() {
        let map = Datamap::build(4).unwrap();
        let first = Walk::<Activation>::run(&map).unwrap();
        let _reverse = Walk::<Deactivation>::run(&map).unwrap();
        let second = Walk::<Activation>::run(&map).unwrap();
        assert_eq!(first.states.ids(), second.states.ids());
        assert_eq!(
            first.transitions.iter().collect::<Vec<_>>(),
            second.transitions.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn single_unit_ring() {
        let map = Datamap::build(1).unwrap();
        let walk = Walk::<Activation>::run(&map).unwrap();
        assert_eq!(walk.states.ids(), &[id("0"), id("1")]);
        let t = walk.transitions.get(&key("0", "1")).unwrap();
        assert_eq!((t.m, t.trans_type), (1, 0));
    }

    #[test]
    fn transition_key_reversal() {
        let k = key("001", "011");
        assert_eq!(k.reversed(), key("011", "001"));
        assert_eq!(k.reversed().reversed(), k);
    }
}
