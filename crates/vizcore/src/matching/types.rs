//! Data types for the matching state machine.
//!
//! Kept small and explicit to make `engine` and `stability` easy to read.

use std::fmt;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProposerId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReviewerId(pub usize);

/// One participant on either side. `Id` is the opposite side's id type.
#[derive(Clone, Debug)]
pub struct Participant<Id> {
    pub label: String,
    /// Full permutation of the opposite side, most preferred first.
    pub prefs: Vec<Id>,
    pub matched: Option<Id>,
    /// Proposal cursor into `prefs`; only proposers advance it.
    pub cursor: usize,
    /// Who turned this participant down, in event order. Informational.
    pub rejected_by: Vec<Id>,
}

impl<Id: Copy + PartialEq> Participant<Id> {
    pub(super) fn new(label: String, prefs: Vec<Id>) -> Self {
        Self {
            label,
            prefs,
            matched: None,
            cursor: 0,
            rejected_by: Vec::new(),
        }
    }

    /// Position of `id` in the preference list (0 = most preferred).
    #[inline]
    pub fn rank_of(&self, id: Id) -> Option<usize> {
        self.prefs.iter().position(|&p| p == id)
    }

    /// Whether `candidate` beats the current partner (anyone beats none).
    #[inline]
    pub fn prefers_over_current(&self, candidate: Id) -> bool {
        match self.matched {
            None => true,
            Some(cur) => self.rank_of(candidate) < self.rank_of(cur),
        }
    }
}

/// One appended trace line; `step` is the proposal event it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub step: usize,
    pub text: String,
}

/// What a single `step()` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Proposal accepted by a free reviewer.
    Accepted {
        proposer: ProposerId,
        reviewer: ReviewerId,
    },
    /// Proposal accepted; the reviewer's previous partner was freed.
    Displaced {
        proposer: ProposerId,
        reviewer: ReviewerId,
        displaced: ProposerId,
    },
    /// Reviewer kept its current partner.
    Rejected {
        proposer: ProposerId,
        reviewer: ReviewerId,
    },
    /// No free proposer with remaining candidates; the state is final.
    Terminated,
}

/// Preference-table validation error. Construction is all-or-nothing;
/// the caller must supply corrected input.
#[derive(Debug)]
pub enum PrefsError {
    /// Two participants on the same side share a label.
    DuplicateLabel { side: &'static str, label: String },
    /// A preference list does not cover the whole opposite side.
    WrongLength {
        label: String,
        expected: usize,
        got: usize,
    },
    /// A preference list names the same counterpart twice.
    DuplicateEntry { label: String, entry: String },
    /// A preference list names a counterpart that does not exist.
    UnknownLabel { label: String, entry: String },
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { side, label } => {
                write!(f, "duplicate {side} label: {label}")
            }
            Self::WrongLength {
                label,
                expected,
                got,
            } => write!(
                f,
                "preference list of {label} has {got} entries, expected {expected}"
            ),
            Self::DuplicateEntry { label, entry } => {
                write!(f, "preference list of {label} repeats {entry}")
            }
            Self::UnknownLabel { label, entry } => {
                write!(f, "preference list of {label} names unknown participant {entry}")
            }
        }
    }
}

impl std::error::Error for PrefsError {}
