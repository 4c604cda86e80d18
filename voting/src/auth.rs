//! Authorization collaborator.

use plurality_types::Address;
use serde::{Deserialize, Serialize};

/// Capabilities the plugin checks before privileged operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Replace the instance's voting settings.
    UpdateSettings,
}

/// Answers whether a caller holds a capability.
///
/// Permission management itself (granting, revoking, admin hierarchies)
/// lives in the embedding system; the plugin only consults the verdict.
pub trait Authorizer {
    fn is_authorized(&self, caller: &Address, capability: Capability) -> bool;
}
