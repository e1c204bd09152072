//! Deferred-acceptance matching (Gale–Shapley) as a steppable state machine.
//!
//! Purpose
//! - Drive the stable-marriage widget: one proposal event per `step()`,
//!   a human-readable trace line per event, and a post-termination
//!   blocking-pair check the UI renders as a stability verdict.
//! - Keep the core pure and synchronous; the animation timer lives in the
//!   caller, which replays `step()` at whatever cadence it likes.
//!
//! Model
//! - Two label-addressed sides (proposers, reviewers), each participant
//!   carrying a full-permutation preference list over the other side.
//! - Free proposers propose in preference order; reviewers tentatively
//!   accept and trade up, displacing their current partner.

pub mod rand;

mod engine;
mod stability;
mod types;

pub use engine::MatchingState;
pub use rand::{draw_preferences, PairCount, PrefsCfg};
pub use stability::{blocking_pairs, BlockingPair};
pub use types::{Participant, PrefsError, ProposerId, ReviewerId, StepOutcome, TraceEntry};

#[cfg(test)]
mod tests;
