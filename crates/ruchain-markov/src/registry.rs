//! # State Registry
//!
//! Append-only, duplicate-rejecting arena of canonical ids. A state's
//! index is its discovery rank, starting at 0, and never changes once
//! assigned. Each traversal direction owns a fresh registry.

use std::collections::HashMap;

use ruchain_core::{CanonicalId, ConsistencyError};

/// Discovery-ordered set of canonical states.
#[derive(Debug, Clone, Default)]
pub struct StateRegistry {
    order: Vec<CanonicalId>,
    index: HashMap<CanonicalId, usize>,
}

impl StateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `id`, if registered.
    pub fn index_of(&self, id: &CanonicalId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &CanonicalId) -> bool {
        self.index.contains_key(id)
    }

    /// Register `id` at the next sequential index and return that index.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::DuplicateState`] if `id` is already
    /// registered.
    pub fn append(&mut self, id: CanonicalId) -> Result<usize, ConsistencyError> {
        if let Some(index) = self.index_of(&id) {
            return Err(ConsistencyError::DuplicateState {
                id: id.to_string(),
                index,
            });
        }
        let next = self.order.len();
        self.index.insert(id.clone(), next);
        self.order.push(id);
        Ok(next)
    }

    /// Id registered at `index`.
    pub fn get(&self, index: usize) -> Option<&CanonicalId> {
        self.order.get(index)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in discovery order.
    pub fn ids(&self) -> &[CanonicalId] {
        &self.order
    }

    /// Consume the registry, yielding ids in discovery order.
    pub fn into_ids(self) -> Vec<CanonicalId> {
        self.order
    }
}
