//! Proposal records keyed by sequential id.

use crate::proposal::Proposal;
use plurality_types::ProposalId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owns every proposal of one plugin instance.
///
/// Ids are allocated monotonically and never reused, so an id observed once
/// refers to the same proposal forever. Structural changes go through
/// `ProposalLifecycle`, tally changes through `VoteEngine`; everything else
/// reads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalStore {
    proposals: HashMap<ProposalId, Proposal>,
    next_id: ProposalId,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly created proposal under the next id.
    pub fn insert(&mut self, proposal: Proposal) -> ProposalId {
        let id = self.next_id;
        self.next_id += 1;
        self.proposals.insert(id, proposal);
        id
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    pub fn get_mut(&mut self, id: ProposalId) -> Option<&mut Proposal> {
        self.proposals.get_mut(&id)
    }

    pub fn contains(&self, id: ProposalId) -> bool {
        self.proposals.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
