//! Observable events emitted by the plugin.

use crate::settings::VotingSettings;
use plurality_types::{Address, NomineeId, ProposalId};
use serde::{Deserialize, Serialize};

/// A structured event describing a completed state change.
///
/// Events are emitted after the mutation they describe has fully applied,
/// never for rejected operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The instance settings were replaced wholesale.
    SettingsUpdated { settings: VotingSettings },
    /// A proposal was created with its initial nominee set.
    ProposalCreated {
        proposal_id: ProposalId,
        creator: Address,
        metadata: Vec<u8>,
        nominees: Vec<NomineeId>,
    },
    /// A nominee was appended to an existing proposal.
    NomineeAdded {
        proposal_id: ProposalId,
        nominee_id: NomineeId,
        /// 0-based index of the new entry in the nominee sequence.
        position: usize,
    },
    /// A voter cast or moved their vote.
    VoteCast {
        proposal_id: ProposalId,
        voter: Address,
        nominee_id: NomineeId,
        /// The voter's weight at cast time.
        weight: u128,
    },
}

/// Transport for emitted events; the actual delivery mechanism (websocket,
/// log, message bus) is up to the embedder.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Discards every event. The default sink for embedders that only care about
/// return values.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: Event) {}
}
