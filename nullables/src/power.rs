//! Nullable voting power source — programmable weights.

use plurality_types::Address;
use plurality_voting::VotingPowerSource;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    weights: HashMap<Address, u128>,
    delegated: HashMap<Address, u128>,
    total_supply: u128,
}

/// A power source whose answers are set by the test.
///
/// Clones share state, so a handle kept outside the plugin can shift
/// weights mid-test (the weight-drift scenarios need exactly that).
#[derive(Clone, Default)]
pub struct NullPowerSource {
    inner: Rc<RefCell<Inner>>,
}

impl NullPowerSource {
    /// Empty source: every weight is zero, total supply is zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total_supply(self, total: u128) -> Self {
        self.inner.borrow_mut().total_supply = total;
        self
    }

    pub fn with_weight(self, who: impl Into<Address>, weight: u128) -> Self {
        self.inner.borrow_mut().weights.insert(who.into(), weight);
        self
    }

    pub fn with_delegated(self, who: impl Into<Address>, votes: u128) -> Self {
        self.inner.borrow_mut().delegated.insert(who.into(), votes);
        self
    }

    /// Change a weight after construction.
    pub fn set_weight(&self, who: impl Into<Address>, weight: u128) {
        self.inner.borrow_mut().weights.insert(who.into(), weight);
    }

    pub fn set_total_supply(&self, total: u128) {
        self.inner.borrow_mut().total_supply = total;
    }

    pub fn set_delegated(&self, who: impl Into<Address>, votes: u128) {
        self.inner.borrow_mut().delegated.insert(who.into(), votes);
    }
}

impl VotingPowerSource for NullPowerSource {
    fn weight_of(&self, who: &Address) -> u128 {
        self.inner.borrow().weights.get(who).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u128 {
        self.inner.borrow().total_supply
    }

    fn delegated_votes_of(&self, who: &Address) -> u128 {
        self.inner.borrow().delegated.get(who).copied().unwrap_or(0)
    }
}
