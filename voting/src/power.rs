//! Voting power source — the external stake oracle.
//!
//! The engine never holds balances itself. Weight is queried live from the
//! embedding system on every call that needs it: per-voter weight at vote
//! time, balance and delegated votes at creation time, total supply for the
//! participation floor. Because queries happen at call time rather than
//! against a snapshot, a voter whose weight changes between two votes leaves
//! a tally value that matches no single historical sample — that drift is
//! part of the contract, not something an implementation may patch away.

use plurality_types::Address;

/// Supplies voting weight from the system embedding the plugin.
///
/// Calls are synchronous and may re-enter the plugin; the engine therefore
/// completes every power query before mutating any proposal state
/// (checks-then-effects).
pub trait VotingPowerSource {
    /// The identity's current direct voting weight (e.g. token balance).
    fn weight_of(&self, who: &Address) -> u128;

    /// Total outstanding voting power across all identities.
    fn total_supply(&self) -> u128;

    /// Voting power delegated to the identity by others.
    ///
    /// Creation eligibility takes the larger of this and [`weight_of`]
    /// (a pure delegate with no balance of their own may still propose).
    ///
    /// [`weight_of`]: VotingPowerSource::weight_of
    fn delegated_votes_of(&self, who: &Address) -> u128;
}
