//! The proposal data model — nominees, positions, voter records, tallies.

use plurality_types::{Address, NomineeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate within one proposal, with its accumulated voting weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nominee {
    pub id: NomineeId,
    pub vote_weight: u128,
}

/// Settings snapshotted when the proposal was created. Immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalParameters {
    /// Support threshold ratio at creation time (parts per million).
    pub support_threshold: u32,
    /// Absolute participation floor: `ceil(total_supply * min_participation
    /// / RATIO_BASE)` evaluated against the supply at creation time.
    pub min_voting_power: u128,
}

/// One proposal: an append-only nominee arena, a position index, and the
/// latest vote per voter.
///
/// Invariants:
/// - `nominee_position[n] == i + 1` iff `nominees[i].id == n`. Position 0
///   (absent from the map) means "not a registered nominee".
/// - The nominee sequence is insertion-ordered; order carries no ranking
///   meaning.
///
/// Nominee ids are caller-supplied and NOT checked for uniqueness. A
/// duplicate id appends a second arena entry and repoints the position map
/// at it, leaving the earlier entry orphaned and permanently unvotable.
/// Callers that care must deduplicate on their side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub parameters: ProposalParameters,
    /// Opaque content payload; stored and emitted, never interpreted.
    pub metadata: Vec<u8>,
    pub(crate) nominees: Vec<Nominee>,
    /// Nominee id → 1-based position in `nominees`.
    pub(crate) nominee_position: HashMap<NomineeId, usize>,
    /// Voter → the nominee they currently back.
    pub(crate) voters: HashMap<Address, NomineeId>,
}

impl Proposal {
    pub fn new(parameters: ProposalParameters, metadata: Vec<u8>) -> Self {
        Self {
            parameters,
            metadata,
            nominees: Vec::new(),
            nominee_position: HashMap::new(),
            voters: HashMap::new(),
        }
    }

    /// Append a nominee with zero weight and index it. Returns the 0-based
    /// index of the new entry.
    ///
    /// Last writer wins in the position map: registering an id twice orphans
    /// the earlier arena entry (see the type-level note).
    pub fn register_nominee(&mut self, id: NomineeId) -> usize {
        self.nominees.push(Nominee { id, vote_weight: 0 });
        let index = self.nominees.len() - 1;
        self.nominee_position.insert(id, index + 1);
        index
    }

    /// 1-based position of a nominee, or 0 if it is not registered.
    pub fn nominee_position(&self, id: &NomineeId) -> usize {
        self.nominee_position.get(id).copied().unwrap_or(0)
    }

    /// The nominee arena in insertion order.
    pub fn nominees(&self) -> &[Nominee] {
        &self.nominees
    }

    pub fn nominee_count(&self) -> usize {
        self.nominees.len()
    }

    /// Current tally of the nominee at the indexed position, or 0 for an
    /// unregistered id.
    pub fn tally_of(&self, id: &NomineeId) -> u128 {
        match self.nominee_position(id) {
            0 => 0,
            pos => self.nominees[pos - 1].vote_weight,
        }
    }

    /// Sum of all nominee tallies (orphaned entries included).
    pub fn total_tally(&self) -> u128 {
        self.nominees
            .iter()
            .fold(0u128, |acc, n| acc.saturating_add(n.vote_weight))
    }

    /// The nominee with the highest tally, if any nominee is registered.
    /// Ties resolve arbitrarily. Read-only convenience; the verifier does
    /// not use this.
    pub fn leading_nominee(&self) -> Option<(NomineeId, u128)> {
        self.nominees
            .iter()
            .max_by_key(|n| n.vote_weight)
            .map(|n| (n.id, n.vote_weight))
    }

    /// The nominee the voter currently backs, if they have voted.
    pub fn vote_of(&self, voter: &Address) -> Option<NomineeId> {
        self.voters.get(voter).copied()
    }

    pub fn has_voted(&self, voter: &Address) -> bool {
        self.voters.contains_key(voter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_id(byte: u8) -> NomineeId {
        NomineeId::new([byte; 32])
    }

    fn empty_proposal() -> Proposal {
        Proposal::new(
            ProposalParameters {
                support_threshold: 500_000,
                min_voting_power: 0,
            },
            Vec::new(),
        )
    }

    #[test]
    fn register_assigns_sequential_indices() {
        let mut p = empty_proposal();
        assert_eq!(p.register_nominee(make_id(1)), 0);
        assert_eq!(p.register_nominee(make_id(2)), 1);
        assert_eq!(p.nominee_count(), 2);
    }

    #[test]
    fn position_is_one_based_with_zero_sentinel() {
        let mut p = empty_proposal();
        p.register_nominee(make_id(1));
        p.register_nominee(make_id(2));

        assert_eq!(p.nominee_position(&make_id(1)), 1);
        assert_eq!(p.nominee_position(&make_id(2)), 2);
        assert_eq!(p.nominee_position(&make_id(9)), 0);
    }

    #[test]
    fn position_invariant_holds_after_registration() {
        let mut p = empty_proposal();
        for byte in 1..=5 {
            p.register_nominee(make_id(byte));
        }
        for (i, nominee) in p.nominees().iter().enumerate() {
            assert_eq!(p.nominee_position(&nominee.id), i + 1);
        }
    }

    #[test]
    fn duplicate_id_orphans_earlier_entry() {
        let mut p = empty_proposal();
        p.register_nominee(make_id(1));
        p.register_nominee(make_id(2));
        p.register_nominee(make_id(1)); // duplicate

        // Three arena entries, but the position map points at the last one.
        assert_eq!(p.nominee_count(), 3);
        assert_eq!(p.nominee_position(&make_id(1)), 3);
        // The orphaned entry at index 0 still exists with zero weight.
        assert_eq!(p.nominees()[0].id, make_id(1));
        assert_eq!(p.nominees()[0].vote_weight, 0);
    }

    #[test]
    fn tally_of_unregistered_is_zero() {
        let p = empty_proposal();
        assert_eq!(p.tally_of(&make_id(1)), 0);
    }

    #[test]
    fn leading_nominee_none_when_empty() {
        assert!(empty_proposal().leading_nominee().is_none());
    }
}
