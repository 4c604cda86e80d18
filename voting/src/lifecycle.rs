//! Proposal creation and nominee registration.

use crate::error::VotingError;
use crate::power::VotingPowerSource;
use crate::proposal::{Proposal, ProposalParameters};
use crate::settings::VotingSettings;
use crate::store::ProposalStore;
use plurality_types::{ratio_ceil_mul, Address, NomineeId, ProposalId};

/// Creation eligibility checks, parameter snapshotting, and append-only
/// nominee registration.
pub struct ProposalLifecycle;

impl ProposalLifecycle {
    /// Create a proposal and register its initial nominees.
    ///
    /// Eligibility: with a nonzero proposer minimum, the creator's weight —
    /// the larger of live balance and delegated votes — must reach it; the
    /// source's total supply must be nonzero. Both checks complete before
    /// any state is touched.
    ///
    /// The support threshold is snapshotted from the current settings and
    /// the absolute participation floor is fixed against the current total
    /// supply; later settings updates do not reach this proposal.
    ///
    /// Input ids are registered verbatim in order, zero-weighted, without a
    /// duplicate check (see the hazard note on [`Proposal`]).
    pub fn create_proposal(
        &self,
        store: &mut ProposalStore,
        settings: &VotingSettings,
        power: &impl VotingPowerSource,
        creator: &Address,
        metadata: Vec<u8>,
        nominee_ids: &[NomineeId],
    ) -> Result<ProposalId, VotingError> {
        if settings.min_proposer_voting_power > 0 {
            let weight = power
                .weight_of(creator)
                .max(power.delegated_votes_of(creator));
            if weight < settings.min_proposer_voting_power {
                return Err(VotingError::ProposalCreationForbidden(creator.clone()));
            }
        }

        let total_supply = power.total_supply();
        if total_supply == 0 {
            return Err(VotingError::NoVotingPower);
        }

        let parameters = ProposalParameters {
            support_threshold: settings.support_threshold,
            min_voting_power: ratio_ceil_mul(total_supply, settings.min_participation),
        };

        let mut proposal = Proposal::new(parameters, metadata);
        for id in nominee_ids {
            proposal.register_nominee(*id);
        }

        Ok(store.insert(proposal))
    }

    /// Append a nominee to an existing proposal, returning its 0-based
    /// index.
    ///
    /// A proposal only "exists" here once it carries at least one nominee —
    /// an id that was never allocated and a nominee-less record fail alike.
    pub fn add_nominee(
        &self,
        store: &mut ProposalStore,
        proposal_id: ProposalId,
        nominee_id: NomineeId,
    ) -> Result<usize, VotingError> {
        let proposal = store
            .get_mut(proposal_id)
            .filter(|p| p.nominee_count() > 0)
            .ok_or(VotingError::ProposalNotFound(proposal_id))?;

        Ok(proposal.register_nominee(nominee_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubPowerSource;

    fn make_id(byte: u8) -> NomineeId {
        NomineeId::new([byte; 32])
    }

    fn settings(min_proposer: u128) -> VotingSettings {
        VotingSettings {
            support_threshold: 500_000,
            min_participation: 200_000,
            min_proposer_voting_power: min_proposer,
        }
    }

    #[test]
    fn creation_snapshots_parameters() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new().with_total_supply(1000);

        let id = ProposalLifecycle
            .create_proposal(
                &mut store,
                &settings(0),
                &power,
                &Address::from("alice"),
                b"payload".to_vec(),
                &[make_id(1), make_id(2)],
            )
            .unwrap();

        let p = store.get(id).unwrap();
        assert_eq!(p.parameters.support_threshold, 500_000);
        // ceil(1000 * 20%) = 200
        assert_eq!(p.parameters.min_voting_power, 200);
        assert_eq!(p.metadata, b"payload");
        assert_eq!(p.nominee_count(), 2);
        assert_eq!(p.nominee_position(&make_id(1)), 1);
        assert_eq!(p.nominee_position(&make_id(2)), 2);
    }

    #[test]
    fn participation_floor_rounds_up() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new().with_total_supply(3);

        let id = ProposalLifecycle
            .create_proposal(
                &mut store,
                &VotingSettings {
                    min_participation: 333_334,
                    ..settings(0)
                },
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[make_id(1)],
            )
            .unwrap();

        // ceil(3 * 0.333334) = 2, not 1
        assert_eq!(store.get(id).unwrap().parameters.min_voting_power, 2);
    }

    #[test]
    fn participation_above_base_still_creates() {
        // The settings store admits numerators over RATIO_BASE; creation
        // must carry them through rather than panic, scaling the floor past
        // the full supply.
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new().with_total_supply(100);

        let id = ProposalLifecycle
            .create_proposal(
                &mut store,
                &VotingSettings {
                    min_participation: plurality_types::RATIO_BASE + 1,
                    ..settings(0)
                },
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[make_id(1)],
            )
            .unwrap();

        // ceil(100 * 1_000_001 / 1_000_000) = 101
        assert_eq!(store.get(id).unwrap().parameters.min_voting_power, 101);
    }

    #[test]
    fn proposer_below_minimum_forbidden() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new()
            .with_total_supply(1000)
            .with_weight("alice", 9);

        let err = ProposalLifecycle
            .create_proposal(
                &mut store,
                &settings(10),
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[make_id(1)],
            )
            .unwrap_err();

        assert_eq!(
            err,
            VotingError::ProposalCreationForbidden(Address::from("alice"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn proposer_at_minimum_allowed() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new()
            .with_total_supply(1000)
            .with_weight("alice", 10);

        let id = ProposalLifecycle.create_proposal(
            &mut store,
            &settings(10),
            &power,
            &Address::from("alice"),
            Vec::new(),
            &[make_id(1)],
        );
        assert!(id.is_ok());
    }

    #[test]
    fn delegated_votes_satisfy_proposer_minimum() {
        let mut store = ProposalStore::new();
        // No balance of her own, but enough delegated to her.
        let power = StubPowerSource::new()
            .with_total_supply(1000)
            .with_delegated("alice", 10);

        let id = ProposalLifecycle.create_proposal(
            &mut store,
            &settings(10),
            &power,
            &Address::from("alice"),
            Vec::new(),
            &[make_id(1)],
        );
        assert!(id.is_ok());
    }

    #[test]
    fn zero_total_supply_rejected() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new();

        let err = ProposalLifecycle
            .create_proposal(
                &mut store,
                &settings(0),
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[make_id(1)],
            )
            .unwrap_err();

        assert_eq!(err, VotingError::NoVotingPower);
    }

    #[test]
    fn duplicate_input_ids_append_distinct_entries() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new().with_total_supply(100);

        let id = ProposalLifecycle
            .create_proposal(
                &mut store,
                &settings(0),
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[make_id(1), make_id(1)],
            )
            .unwrap();

        let p = store.get(id).unwrap();
        assert_eq!(p.nominee_count(), 2);
        assert_eq!(p.nominee_position(&make_id(1)), 2);
    }

    #[test]
    fn add_nominee_appends_and_returns_index() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new().with_total_supply(100);
        let id = ProposalLifecycle
            .create_proposal(
                &mut store,
                &settings(0),
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[make_id(1)],
            )
            .unwrap();

        let index = ProposalLifecycle
            .add_nominee(&mut store, id, make_id(2))
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(store.get(id).unwrap().nominee_position(&make_id(2)), 2);
    }

    #[test]
    fn add_nominee_to_unknown_proposal_fails() {
        let mut store = ProposalStore::new();
        let err = ProposalLifecycle
            .add_nominee(&mut store, 7, make_id(1))
            .unwrap_err();
        assert_eq!(err, VotingError::ProposalNotFound(7));
    }

    #[test]
    fn add_nominee_to_nominee_less_proposal_fails() {
        let mut store = ProposalStore::new();
        let power = StubPowerSource::new().with_total_supply(100);
        // Created with an empty nominee set — indistinguishable from absent
        // for the add operation.
        let id = ProposalLifecycle
            .create_proposal(
                &mut store,
                &settings(0),
                &power,
                &Address::from("alice"),
                Vec::new(),
                &[],
            )
            .unwrap();

        let err = ProposalLifecycle
            .add_nominee(&mut store, id, make_id(1))
            .unwrap_err();
        assert_eq!(err, VotingError::ProposalNotFound(id));
    }
}
