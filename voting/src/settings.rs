//! Per-instance voting settings.

use crate::error::VotingError;
use plurality_types::RATIO_BASE;
use serde::{Deserialize, Serialize};

/// Configuration for one plugin instance.
///
/// Set at initialization and only ever replaced wholesale through an
/// authorized update — never partially mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingSettings {
    /// Support threshold ratio in parts per million, in `[0, RATIO_BASE - 1]`.
    pub support_threshold: u32,
    /// Minimum participation ratio in parts per million, in `[0, RATIO_BASE]`.
    pub min_participation: u32,
    /// Minimum voting power a creator needs to open a proposal. Zero disables
    /// the check.
    pub min_proposer_voting_power: u128,
}

impl VotingSettings {
    /// Check the support threshold bound.
    ///
    /// This is the only validation the engine performs — participation and
    /// duration bounds are intentionally left to the embedder.
    pub fn validate(&self) -> Result<(), VotingError> {
        if self.support_threshold > RATIO_BASE - 1 {
            return Err(VotingError::RatioOutOfBounds(self.support_threshold));
        }
        Ok(())
    }
}

impl Default for VotingSettings {
    fn default() -> Self {
        Self {
            // Simple majority, half the supply participating, open proposing.
            support_threshold: 500_000,
            min_participation: 500_000,
            min_proposer_voting_power: 0,
        }
    }
}

/// Holds the current settings for one instance.
pub struct SettingsStore {
    current: VotingSettings,
}

impl SettingsStore {
    /// Create a store with validated initial settings.
    pub fn new(initial: VotingSettings) -> Result<Self, VotingError> {
        initial.validate()?;
        Ok(Self { current: initial })
    }

    /// Replace the settings atomically. Authorization is checked by the
    /// caller before this point.
    pub fn update(&mut self, new: VotingSettings) -> Result<(), VotingError> {
        new.validate()?;
        self.current = new;
        Ok(())
    }

    /// The current settings. Side-effect free.
    pub fn read(&self) -> &VotingSettings {
        &self.current
    }
}
