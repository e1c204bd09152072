//! Algorithm engines behind the interactive visualizations.
//!
//! The site's widgets are thin animation shells; the two pieces with real
//! algorithmic content live here as pure, steppable state machines:
//! - `matching`: Gale–Shapley deferred acceptance with a per-step trace
//!   and a post-hoc blocking-pair check.
//! - `hull`: Andrew's monotone-chain convex hull over identified points.
//!
//! Both are synchronous and I/O-free. The rendering layer drives `step()`
//! on its own timer and reads state snapshots between steps.

pub mod api;
pub mod hull;
pub mod matching;
pub mod replay;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{convex_hull, hull_points, Point, PointId, ScatterCfg};
    pub use crate::matching::{
        blocking_pairs, BlockingPair, MatchingState, PairCount, PrefsCfg, PrefsError, StepOutcome,
        TraceEntry,
    };
    pub use crate::replay::ReplayToken;
    pub use nalgebra::Vector2 as Vec2;
}
