//! # Chain Tables
//!
//! The flat, index-aligned sequences handed to equation assembly. State
//! indices and transition classes are shifted to 1-based here, matching
//! the numeric-array convention of the consumer; everything upstream of
//! this module is 0-based.

use serde::{Deserialize, Serialize};

use crate::chain::MarkovChain;

/// Column-oriented view of a [`MarkovChain`].
///
/// State columns (`alphas`, `mask_ids`) share one length and order;
/// transition columns (`m`, `n`, `i_pre`, `i_post`, `trans_types`) share
/// another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainTables {
    /// Number of regulatory units.
    pub ring_size: usize,
    /// Degree of activation per state.
    pub alphas: Vec<f64>,
    /// Forward multiplicity per transition.
    pub m: Vec<u32>,
    /// Reverse multiplicity per transition.
    pub n: Vec<u32>,
    /// 1-based source state per transition.
    #[serde(rename = "iPre")]
    pub i_pre: Vec<usize>,
    /// 1-based target state per transition.
    #[serde(rename = "iPost")]
    pub i_post: Vec<usize>,
    /// 1-based transition class per transition.
    #[serde(rename = "transTypes")]
    pub trans_types: Vec<u32>,
    /// Canonical id per state.
    #[serde(rename = "mask_IDs")]
    pub mask_ids: Vec<String>,
}

impl ChainTables {
    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.alphas.len()
    }

    /// Number of transitions.
    pub fn transition_count(&self) -> usize {
        self.m.len()
    }

    /// Whether every column agrees with its group's length.
    pub fn is_consistent(&self) -> bool {
        let states = self.state_count();
        let transitions = self.transition_count();
        self.mask_ids.len() == states
            && [
                self.n.len(),
                self.i_pre.len(),
                self.i_post.len(),
                self.trans_types.len(),
            ]
            .iter()
            .all(|len| *len == transitions)
    }
}

impl From<&MarkovChain> for ChainTables {
    fn from(chain: &MarkovChain) -> Self {
        let t = &chain.transitions;
        Self {
            ring_size: chain.ring_size,
            alphas: chain.states.iter().map(|s| s.alpha).collect(),
            m: t.iter().map(|t| t.m).collect(),
            n: t.iter().map(|t| t.n).collect(),
            i_pre: t.iter().map(|t| t.i_pre + 1).collect(),
            i_post: t.iter().map(|t| t.i_post + 1).collect(),
            trans_types: t.iter().map(|t| t.trans_type + 1).collect(),
            mask_ids: chain.states.iter().map(|s| s.id.to_string()).collect(),
        }
    }
}
