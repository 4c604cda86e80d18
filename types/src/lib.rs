//! Fundamental types for the plurality voting engine.
//!
//! This crate defines the types shared across the workspace: opaque voter
//! identities, nominee identifiers, proposal ids, and the fixed-point ratio
//! arithmetic used for participation thresholds.

pub mod address;
pub mod nominee;
pub mod ratio;

pub use address::Address;
pub use nominee::NomineeId;
pub use ratio::{ratio_ceil_mul, RATIO_BASE};

/// Sequential proposal identifier, assigned at creation and never reused.
pub type ProposalId = u64;
