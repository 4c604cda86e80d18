//! Nullable authorizer — per-capability grants, or blanket allow/deny.

use plurality_types::Address;
use plurality_voting::{Authorizer, Capability};
use std::collections::HashSet;

/// An authorizer whose grants are set by the test.
#[derive(Clone, Debug, Default)]
pub struct NullAuthorizer {
    allow_all: bool,
    granted: HashSet<(Address, Capability)>,
}

impl NullAuthorizer {
    /// Grants every capability to every caller.
    pub fn allowing_all() -> Self {
        Self {
            allow_all: true,
            granted: HashSet::new(),
        }
    }

    /// Grants nothing until [`grant`](Self::grant) is called.
    pub fn denying_all() -> Self {
        Self::default()
    }

    /// Grant one capability to one caller.
    pub fn grant(mut self, who: impl Into<Address>, capability: Capability) -> Self {
        self.granted.insert((who.into(), capability));
        self
    }
}

impl Authorizer for NullAuthorizer {
    fn is_authorized(&self, caller: &Address, capability: Capability) -> bool {
        self.allow_all || self.granted.contains(&(caller.clone(), capability))
    }
}
