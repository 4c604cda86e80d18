//! In-crate power source stub for the unit tests.
//!
//! The unit tests cannot use `plurality-nullables` (it links this crate as a
//! normal dependency, so its doubles implement the traits of a different
//! build of the library). Integration tests under `tests/` use the nullables
//! crate; in-crate tests use this stub.

use crate::power::VotingPowerSource;
use plurality_types::Address;
use std::cell::RefCell;
use std::collections::HashMap;

/// Programmable [`VotingPowerSource`] with interior mutability, so a test
/// can shift a weight between two votes while the engine holds `&self`.
#[derive(Default)]
pub(crate) struct StubPowerSource {
    weights: RefCell<HashMap<Address, u128>>,
    delegated: RefCell<HashMap<Address, u128>>,
    total_supply: RefCell<u128>,
}

impl StubPowerSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_total_supply(self, total: u128) -> Self {
        *self.total_supply.borrow_mut() = total;
        self
    }

    pub(crate) fn with_weight(self, who: impl Into<Address>, weight: u128) -> Self {
        self.weights.borrow_mut().insert(who.into(), weight);
        self
    }

    pub(crate) fn with_delegated(self, who: impl Into<Address>, votes: u128) -> Self {
        self.delegated.borrow_mut().insert(who.into(), votes);
        self
    }

    pub(crate) fn set_weight(&self, who: impl Into<Address>, weight: u128) {
        self.weights.borrow_mut().insert(who.into(), weight);
    }
}

impl VotingPowerSource for StubPowerSource {
    fn weight_of(&self, who: &Address) -> u128 {
        self.weights.borrow().get(who).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u128 {
        *self.total_supply.borrow()
    }

    fn delegated_votes_of(&self, who: &Address) -> u128 {
        self.delegated.borrow().get(who).copied().unwrap_or(0)
    }
}
