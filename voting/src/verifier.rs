//! Top-N tally verification.

use crate::store::ProposalStore;
use plurality_types::ProposalId;

/// Validates a claimed ranked result against recorded tallies without
/// sorting.
///
/// An off-path actor sorts the tallies at leisure and submits the top-K
/// *values*; the on-path check is a single scan. The membership test is by
/// value, not nominee identity — two nominees tied at the same weight are
/// indistinguishable to it, and the claimed side is never itself validated
/// (cardinality, or whether a claimed value belongs to any real nominee).
/// It answers exactly one question: does any omitted nominee out-tally the
/// smallest claimed value? Callers needing identity-level guarantees must
/// layer them separately rather than lean on this check.
pub struct TopNVerifier;

impl TopNVerifier {
    /// Check that no nominee excluded from `claimed` out-tallies the
    /// smallest claimed value. Never fails; always answers.
    ///
    /// Conventions (both vacuous-truth cases):
    /// - Unknown proposal or empty nominee list: `true` — there is no
    ///   excluded nominee to violate anything.
    /// - Empty `claimed`: `true` exactly when every nominee weight is zero.
    ///   Zero-weight nominees never count as violations, so an all-zero
    ///   tally supports any claim, including the empty one.
    pub fn validate_top_nominees(
        &self,
        store: &ProposalStore,
        proposal_id: ProposalId,
        claimed: &[u128],
    ) -> bool {
        let Some(proposal) = store.get(proposal_id) else {
            return true;
        };

        let mut best_excluded: u128 = 0;
        for nominee in proposal.nominees() {
            if !claimed.contains(&nominee.vote_weight) {
                best_excluded = best_excluded.max(nominee.vote_weight);
            }
        }

        match claimed.iter().min() {
            Some(&smallest) => best_excluded <= smallest,
            None => best_excluded == 0,
        }
    }
}
