//! Blocking-pair search over a finished matching.

use super::engine::MatchingState;
use super::types::{ProposerId, ReviewerId};

/// A proposer/reviewer pair that would both rather be with each other
/// than with their assigned partners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockingPair {
    pub proposer: String,
    pub reviewer: String,
}

/// Find all blocking pairs. Meaningful after termination; before that the
/// matching is still in flux and the check reports nothing, matching the
/// widget that only renders a verdict for completed runs.
///
/// Deferred acceptance must always produce an empty list here.
pub fn blocking_pairs(state: &MatchingState) -> Vec<BlockingPair> {
    if !state.is_done() {
        return Vec::new();
    }
    let mut pairs = Vec::new();
    for (pi, p) in state.proposers().iter().enumerate() {
        for (ri, r) in state.reviewers().iter().enumerate() {
            if p.matched == Some(ReviewerId(ri)) {
                continue;
            }
            // An unmatched participant prefers any partner over none.
            if p.prefers_over_current(ReviewerId(ri)) && r.prefers_over_current(ProposerId(pi)) {
                pairs.push(BlockingPair {
                    proposer: p.label.clone(),
                    reviewer: r.label.clone(),
                });
            }
        }
    }
    pairs
}
