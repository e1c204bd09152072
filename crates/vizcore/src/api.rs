//! Curated internal API surface (UNSTABLE).
//!
//! Convenience re-exports for the demo runner and experiments. Not a
//! stability boundary; breaking changes are allowed and expected.

// Deferred-acceptance matching
pub use crate::matching::{
    blocking_pairs, draw_preferences, BlockingPair, MatchingState, PairCount, Participant,
    PrefsCfg, PrefsError, ProposerId, ReviewerId, StepOutcome, TraceEntry,
};
// Convex hull over identified points
pub use crate::hull::{convex_hull, draw_points, hull_points, Point, PointId, ScatterCfg};
// Reproducible randomness
pub use crate::replay::ReplayToken;
