//! Nominee identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one nominee within a proposal: 32 caller-supplied bytes the
/// engine treats as fully opaque. Embedders typically put a content hash
/// here, but nothing is derived, checked, or ranked from the bytes — only
/// compared.
///
/// All zeros is reserved: it reads as "no nominee", so the vote engine
/// rejects it and position lookups use it as their absent sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NomineeId([u8; 32]);

impl NomineeId {
    /// The reserved all-zero id.
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

// Debug keeps log lines short (first 4 bytes); Display gives the full id
// for event consumers that need to match it back to their own records.

impl fmt::Debug for NomineeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NomineeId({})", to_hex(&self.0[..4]))
    }
}

impl fmt::Display for NomineeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_hex(&self.0))
    }
}

// Local lowercase-hex formatting; not worth a dependency for two impls.
fn to_hex(bytes: &[u8]) -> String {
    use fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
