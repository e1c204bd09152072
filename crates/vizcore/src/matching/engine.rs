//! The deferred-acceptance stepper.
//!
//! Exactly one proposal event per `step()` call. Matches are always
//! mutual: the only writers of `matched` fields are `link` and the
//! displacement branch, which frees the old partner before relinking.

use std::collections::HashMap;

use super::types::{Participant, PrefsError, ProposerId, ReviewerId, StepOutcome, TraceEntry};

/// Full state of one deferred-acceptance run.
///
/// Becomes immutable once the termination flag is set: further `step()`
/// calls return [`StepOutcome::Terminated`] without touching anything.
#[derive(Clone, Debug)]
pub struct MatchingState {
    proposers: Vec<Participant<ReviewerId>>,
    reviewers: Vec<Participant<ProposerId>>,
    steps: usize,
    done: bool,
    active: Option<ProposerId>,
    trace: Vec<TraceEntry>,
}

impl MatchingState {
    /// Build a fresh state from labeled preference tables.
    ///
    /// Each list must be a permutation of the opposite side's labels;
    /// anything else is a configuration error and fails construction.
    pub fn new(
        proposer_prefs: &[(String, Vec<String>)],
        reviewer_prefs: &[(String, Vec<String>)],
    ) -> Result<Self, PrefsError> {
        let p_index = index_side("proposer", proposer_prefs)?;
        let r_index = index_side("reviewer", reviewer_prefs)?;
        let proposers = build_side(proposer_prefs, &r_index, ReviewerId)?;
        let reviewers = build_side(reviewer_prefs, &p_index, ProposerId)?;
        Ok(Self {
            proposers,
            reviewers,
            steps: 0,
            done: false,
            active: None,
            trace: Vec::new(),
        })
    }

    /// Perform one proposal event.
    ///
    /// Tie-break: the acting proposer is the first unmatched one with
    /// remaining candidates, in original input order. This only shapes
    /// the trace; the final matching is independent of proposal order.
    pub fn step(&mut self) -> StepOutcome {
        if self.done {
            return StepOutcome::Terminated;
        }
        let Some(p) = self.next_free_proposer() else {
            self.done = true;
            self.active = None;
            let text = if self.proposers.iter().all(|p| p.matched.is_some()) {
                "All participants matched. Algorithm terminates.".to_string()
            } else {
                "All free proposers exhausted their lists. Algorithm terminates.".to_string()
            };
            self.trace.push(TraceEntry {
                step: self.steps,
                text,
            });
            return StepOutcome::Terminated;
        };

        let r = {
            let pr = &mut self.proposers[p.0];
            let r = pr.prefs[pr.cursor];
            pr.cursor += 1;
            r
        };

        let outcome = match self.reviewers[r.0].matched {
            None => {
                self.link(p, r);
                StepOutcome::Accepted {
                    proposer: p,
                    reviewer: r,
                }
            }
            Some(q) => {
                if self.reviewers[r.0].prefers_over_current(p) {
                    self.proposers[q.0].matched = None;
                    self.proposers[q.0].rejected_by.push(r);
                    self.link(p, r);
                    StepOutcome::Displaced {
                        proposer: p,
                        reviewer: r,
                        displaced: q,
                    }
                } else {
                    self.proposers[p.0].rejected_by.push(r);
                    StepOutcome::Rejected {
                        proposer: p,
                        reviewer: r,
                    }
                }
            }
        };

        self.steps += 1;
        self.active = Some(p);
        let text = self.describe(outcome);
        self.trace.push(TraceEntry {
            step: self.steps,
            text,
        });
        outcome
    }

    /// Step until terminated; returns the number of proposal events run.
    /// Bounded by proposers × reviewers since every event either advances
    /// one cursor or sets the termination flag.
    pub fn run_to_completion(&mut self) -> usize {
        let before = self.steps;
        while !self.done {
            self.step();
        }
        self.steps - before
    }

    pub fn proposers(&self) -> &[Participant<ReviewerId>] {
        &self.proposers
    }

    pub fn reviewers(&self) -> &[Participant<ProposerId>] {
        &self.reviewers
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Proposal events so far. The terminal trace line reuses the final
    /// count rather than consuming a step of its own.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Proposer that acted in the most recent event, for highlighting.
    pub fn active_proposer(&self) -> Option<&str> {
        self.active.map(|p| self.proposers[p.0].label.as_str())
    }

    /// Matched (proposer, reviewer) label pairs, in proposer order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.proposers
            .iter()
            .filter_map(|p| {
                p.matched
                    .map(|r| (p.label.as_str(), self.reviewers[r.0].label.as_str()))
            })
            .collect()
    }

    fn next_free_proposer(&self) -> Option<ProposerId> {
        self.proposers
            .iter()
            .position(|p| p.matched.is_none() && p.cursor < p.prefs.len())
            .map(ProposerId)
    }

    fn link(&mut self, p: ProposerId, r: ReviewerId) {
        self.proposers[p.0].matched = Some(r);
        self.reviewers[r.0].matched = Some(p);
    }

    fn describe(&self, outcome: StepOutcome) -> String {
        match outcome {
            StepOutcome::Accepted { proposer, reviewer } => {
                let p = &self.proposers[proposer.0].label;
                let r = &self.reviewers[reviewer.0].label;
                format!("{p} proposes to {r}. {r} is free and accepts.")
            }
            StepOutcome::Displaced {
                proposer,
                reviewer,
                displaced,
            } => {
                let p = &self.proposers[proposer.0].label;
                let r = &self.reviewers[reviewer.0].label;
                let q = &self.proposers[displaced.0].label;
                format!("{p} proposes to {r}. {r} prefers {p} over {q}; {q} is rejected.")
            }
            StepOutcome::Rejected { proposer, reviewer } => {
                let p = &self.proposers[proposer.0].label;
                let rv = &self.reviewers[reviewer.0];
                let r = &rv.label;
                let cur = rv
                    .matched
                    .map(|q| self.proposers[q.0].label.as_str())
                    .unwrap_or("nobody");
                format!("{p} proposes to {r}. {r} prefers {cur}; {p} is rejected.")
            }
            StepOutcome::Terminated => String::new(),
        }
    }
}

fn index_side(
    side: &'static str,
    raw: &[(String, Vec<String>)],
) -> Result<HashMap<String, usize>, PrefsError> {
    let mut index = HashMap::with_capacity(raw.len());
    for (i, (label, _)) in raw.iter().enumerate() {
        if index.insert(label.clone(), i).is_some() {
            return Err(PrefsError::DuplicateLabel {
                side,
                label: label.clone(),
            });
        }
    }
    Ok(index)
}

fn build_side<Id: Copy + PartialEq>(
    raw: &[(String, Vec<String>)],
    other_index: &HashMap<String, usize>,
    wrap: impl Fn(usize) -> Id,
) -> Result<Vec<Participant<Id>>, PrefsError> {
    let mut side = Vec::with_capacity(raw.len());
    for (label, prefs) in raw {
        if prefs.len() != other_index.len() {
            return Err(PrefsError::WrongLength {
                label: label.clone(),
                expected: other_index.len(),
                got: prefs.len(),
            });
        }
        let mut seen = vec![false; other_index.len()];
        let mut ids = Vec::with_capacity(prefs.len());
        for entry in prefs {
            let Some(&i) = other_index.get(entry) else {
                return Err(PrefsError::UnknownLabel {
                    label: label.clone(),
                    entry: entry.clone(),
                });
            };
            if seen[i] {
                return Err(PrefsError::DuplicateEntry {
                    label: label.clone(),
                    entry: entry.clone(),
                });
            }
            seen[i] = true;
            ids.push(wrap(i));
        }
        side.push(Participant::new(label.clone(), ids));
    }
    Ok(side)
}
