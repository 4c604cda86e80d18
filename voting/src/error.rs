use crate::auth::Capability;
use plurality_types::{Address, NomineeId, ProposalId};
use thiserror::Error;

/// Precondition failures reported synchronously to the caller.
///
/// Every check runs before any mutation: an operation either fails with one
/// of these and leaves no trace, or applies fully. Nothing is retried or
/// swallowed internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VotingError {
    #[error("support threshold {0} out of bounds (must be below RATIO_BASE)")]
    RatioOutOfBounds(u32),

    #[error("caller {caller} lacks the {capability:?} capability")]
    Unauthorized {
        caller: Address,
        capability: Capability,
    },

    #[error("creator {0} holds less voting power than the proposer minimum")]
    ProposalCreationForbidden(Address),

    #[error("total voting power is zero")]
    NoVotingPower,

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("vote by {voter} for nominee {nominee_id} on proposal {proposal_id} is forbidden")]
    VoteCastForbidden {
        proposal_id: ProposalId,
        voter: Address,
        nominee_id: NomineeId,
    },
}
