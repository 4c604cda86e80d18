//! The vote-casting state transition.

use crate::error::VotingError;
use crate::events::Event;
use crate::power::VotingPowerSource;
use crate::proposal::Proposal;
use crate::store::ProposalStore;
use plurality_types::{Address, NomineeId, ProposalId};

/// Applies votes and vote changes to a proposal's tally.
///
/// Replacement is always on: a voter's later vote supersedes and reverses
/// the earlier one. Weight is re-queried from the power source at every
/// cast — never snapshotted — so the reversal uses the voter's weight *now*,
/// not the weight they carried when the old vote landed. A voter whose
/// weight changed in between therefore leaves a residue in the old
/// nominee's tally; that drift is part of the contract (the tally reflects
/// current economic stake), not a defect.
pub struct VoteEngine;

impl VoteEngine {
    /// Whether `voter` may currently cast a vote for `nominee_id`.
    ///
    /// True only if the proposal exists with at least one nominee, the id is
    /// nonzero and registered, and the voter's live weight is nonzero.
    pub fn can_vote(
        &self,
        store: &ProposalStore,
        power: &impl VotingPowerSource,
        proposal_id: ProposalId,
        voter: &Address,
        nominee_id: &NomineeId,
    ) -> bool {
        let Some(proposal) = store.get(proposal_id) else {
            return false;
        };
        self.eligible(proposal, nominee_id) && power.weight_of(voter) > 0
    }

    /// Cast or move a vote. Returns the event describing the applied change.
    ///
    /// Order matters for re-entrancy: every check, including the external
    /// weight query, completes before the first mutation. A power source
    /// that calls back into the plugin mid-query observes the pre-vote
    /// state, never a half-applied tally.
    pub fn vote(
        &self,
        store: &mut ProposalStore,
        power: &impl VotingPowerSource,
        proposal_id: ProposalId,
        voter: &Address,
        nominee_id: NomineeId,
    ) -> Result<Event, VotingError> {
        let forbidden = || VotingError::VoteCastForbidden {
            proposal_id,
            voter: voter.clone(),
            nominee_id,
        };

        // Checks. The store borrow is reacquired after the external call so
        // nothing mutable is held across it.
        match store.get(proposal_id) {
            Some(proposal) if self.eligible(proposal, &nominee_id) => {}
            _ => return Err(forbidden()),
        }

        let weight = power.weight_of(voter);
        if weight == 0 {
            return Err(forbidden());
        }

        // Effects.
        let proposal = store
            .get_mut(proposal_id)
            .ok_or_else(forbidden)?;

        let previous = proposal.voters.insert(voter.clone(), nominee_id);
        match previous {
            Some(old_id) if old_id != nominee_id => {
                // Reverse the old vote at today's weight, then apply the new
                // one. Saturating: with weight drift the reversal may exceed
                // what the old vote actually contributed.
                let old_pos = proposal.nominee_position(&old_id);
                if old_pos != 0 {
                    let w = &mut proposal.nominees[old_pos - 1].vote_weight;
                    *w = w.saturating_sub(weight);
                }
                Self::add_weight(proposal, &nominee_id, weight);
            }
            Some(_) => {
                // Same nominee again: tallies untouched, recorded vote
                // already refreshed by the insert above.
            }
            None => {
                Self::add_weight(proposal, &nominee_id, weight);
            }
        }

        Ok(Event::VoteCast {
            proposal_id,
            voter: voter.clone(),
            nominee_id,
            weight,
        })
    }

    fn eligible(&self, proposal: &Proposal, nominee_id: &NomineeId) -> bool {
        proposal.nominee_count() > 0
            && !nominee_id.is_zero()
            && proposal.nominee_position(nominee_id) != 0
    }

    fn add_weight(proposal: &mut Proposal, nominee_id: &NomineeId, weight: u128) {
        let pos = proposal.nominee_position(nominee_id);
        debug_assert!(pos != 0, "eligibility checked before effects");
        let w = &mut proposal.nominees[pos - 1].vote_weight;
        *w = w.saturating_add(weight);
    }
}
