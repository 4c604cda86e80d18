//! Nominee-based majority voting.
//!
//! Proposals carry an open-ended, caller-supplied set of nominees (opaque
//! 32-byte identifiers). Each voter backs exactly one nominee at a time and
//! may move that backing at any moment — the later vote reverses the earlier
//! one. Winners are confirmed through a cheap threshold check against the
//! recorded tallies instead of a full sort ([`verifier`]).
//!
//! ## Module overview
//!
//! - [`settings`] — per-instance voting settings and their store.
//! - [`proposal`] — the proposal/nominee/voter data model.
//! - [`store`] — proposal records keyed by sequential id.
//! - [`lifecycle`] — creation eligibility and nominee registration.
//! - [`engine`] — the vote / vote-replacement state transition.
//! - [`verifier`] — top-N tally verification in better-than-sort time.
//! - [`power`], [`auth`] — traits for the external collaborators.
//! - [`events`] — observable events and the sink trait.
//! - [`plugin`] — the facade wiring everything together per instance.
//! - [`error`] — the error taxonomy.

pub mod auth;
pub mod engine;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod plugin;
pub mod power;
pub mod proposal;
pub mod settings;
pub mod store;
pub mod verifier;

#[cfg(test)]
mod testing;

pub use auth::{Authorizer, Capability};
pub use engine::VoteEngine;
pub use error::VotingError;
pub use events::{Event, EventSink};
pub use lifecycle::ProposalLifecycle;
pub use plugin::VotingPlugin;
pub use power::VotingPowerSource;
pub use proposal::{Nominee, Proposal, ProposalParameters};
pub use settings::{SettingsStore, VotingSettings};
pub use store::ProposalStore;
pub use verifier::TopNVerifier;
