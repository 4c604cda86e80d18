//! The plugin facade — one instance of the voting system.

use crate::auth::{Authorizer, Capability};
use crate::engine::VoteEngine;
use crate::error::VotingError;
use crate::events::{Event, EventSink, NullSink};
use crate::lifecycle::ProposalLifecycle;
use crate::power::VotingPowerSource;
use crate::proposal::Proposal;
use crate::settings::{SettingsStore, VotingSettings};
use crate::store::ProposalStore;
use crate::verifier::TopNVerifier;
use plurality_types::{Address, NomineeId, ProposalId};

/// Composes the stores, the lifecycle, the vote engine, and the verifier
/// behind the external collaborators supplied by the embedder.
///
/// All mutation funnels through here: authorization and eligibility are
/// checked up front, components apply the change, and the corresponding
/// event goes to the sink only after the mutation has fully landed.
pub struct VotingPlugin<P, A> {
    settings: SettingsStore,
    proposals: ProposalStore,
    lifecycle: ProposalLifecycle,
    engine: VoteEngine,
    verifier: TopNVerifier,
    power: P,
    auth: A,
    events: Box<dyn EventSink>,
}

impl<P: VotingPowerSource, A: Authorizer> VotingPlugin<P, A> {
    /// Create an instance with validated initial settings and a discarding
    /// event sink.
    pub fn new(power: P, auth: A, initial: VotingSettings) -> Result<Self, VotingError> {
        Ok(Self {
            settings: SettingsStore::new(initial)?,
            proposals: ProposalStore::new(),
            lifecycle: ProposalLifecycle,
            engine: VoteEngine,
            verifier: TopNVerifier,
            power,
            auth,
            events: Box::new(NullSink),
        })
    }

    /// Route emitted events to the given sink.
    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Replace the voting settings. Requires [`Capability::UpdateSettings`].
    pub fn update_settings(
        &mut self,
        caller: &Address,
        new: VotingSettings,
    ) -> Result<(), VotingError> {
        if !self.auth.is_authorized(caller, Capability::UpdateSettings) {
            return Err(VotingError::Unauthorized {
                caller: caller.clone(),
                capability: Capability::UpdateSettings,
            });
        }
        self.settings.update(new.clone())?;
        tracing::info!(caller = %caller, ?new, "voting settings updated");
        self.events.emit(Event::SettingsUpdated { settings: new });
        Ok(())
    }

    /// Create a proposal over the given nominee ids.
    pub fn create_proposal(
        &mut self,
        creator: &Address,
        metadata: Vec<u8>,
        nominees: &[NomineeId],
    ) -> Result<ProposalId, VotingError> {
        let proposal_id = self.lifecycle.create_proposal(
            &mut self.proposals,
            self.settings.read(),
            &self.power,
            creator,
            metadata.clone(),
            nominees,
        )?;
        tracing::info!(
            proposal_id,
            creator = %creator,
            nominee_count = nominees.len(),
            "proposal created"
        );
        self.events.emit(Event::ProposalCreated {
            proposal_id,
            creator: creator.clone(),
            metadata,
            nominees: nominees.to_vec(),
        });
        Ok(proposal_id)
    }

    /// Append a nominee to an existing proposal; returns its 0-based index.
    pub fn add_nominee(
        &mut self,
        proposal_id: ProposalId,
        nominee_id: NomineeId,
    ) -> Result<usize, VotingError> {
        let position = self
            .lifecycle
            .add_nominee(&mut self.proposals, proposal_id, nominee_id)?;
        tracing::debug!(proposal_id, nominee_id = %nominee_id, position, "nominee added");
        self.events.emit(Event::NomineeAdded {
            proposal_id,
            nominee_id,
            position,
        });
        Ok(position)
    }

    /// Cast or move `voter`'s vote on a proposal.
    pub fn vote(
        &mut self,
        voter: &Address,
        proposal_id: ProposalId,
        nominee_id: NomineeId,
    ) -> Result<(), VotingError> {
        let event = self.engine.vote(
            &mut self.proposals,
            &self.power,
            proposal_id,
            voter,
            nominee_id,
        )?;
        if let Event::VoteCast { weight, .. } = &event {
            tracing::debug!(
                proposal_id,
                voter = %voter,
                nominee_id = %nominee_id,
                weight = *weight,
                "vote cast"
            );
        }
        self.events.emit(event);
        Ok(())
    }

    /// Whether `voter` could currently vote for `nominee_id`. Side-effect
    /// free.
    pub fn can_vote(
        &self,
        proposal_id: ProposalId,
        voter: &Address,
        nominee_id: &NomineeId,
    ) -> bool {
        self.engine
            .can_vote(&self.proposals, &self.power, proposal_id, voter, nominee_id)
    }

    /// The proposal record, if the id was ever allocated.
    pub fn get_proposal(&self, proposal_id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(proposal_id)
    }

    /// Verify a claimed top-N tally result. Never fails.
    pub fn validate_top_nominees(&self, proposal_id: ProposalId, claimed: &[u128]) -> bool {
        self.verifier
            .validate_top_nominees(&self.proposals, proposal_id, claimed)
    }

    /// Total outstanding voting power, straight from the power source.
    pub fn total_voting_power(&self) -> u128 {
        self.power.total_supply()
    }

    pub fn support_threshold(&self) -> u32 {
        self.settings.read().support_threshold
    }

    pub fn min_participation(&self) -> u32 {
        self.settings.read().min_participation
    }

    pub fn min_proposer_voting_power(&self) -> u128 {
        self.settings.read().min_proposer_voting_power
    }
}
