use super::*;
use crate::replay::ReplayToken;
use proptest::prelude::*;

fn side(rows: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    rows.iter()
        .map(|(label, prefs)| {
            (
                label.to_string(),
                prefs.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}

fn mutual(state: &MatchingState) -> bool {
    let forward = state.proposers().iter().enumerate().all(|(pi, p)| match p.matched {
        Some(r) => state.reviewers()[r.0].matched == Some(ProposerId(pi)),
        None => true,
    });
    let backward = state.reviewers().iter().enumerate().all(|(ri, r)| match r.matched {
        Some(p) => state.proposers()[p.0].matched == Some(ReviewerId(ri)),
        None => true,
    });
    forward && backward
}

#[test]
fn displacement_and_trace_wording() {
    let proposers = side(&[("A", &["1", "2"]), ("B", &["1", "2"])]);
    let reviewers = side(&[("1", &["B", "A"]), ("2", &["A", "B"])]);
    let mut s = MatchingState::new(&proposers, &reviewers).unwrap();

    assert!(matches!(
        s.step(),
        StepOutcome::Accepted {
            proposer: ProposerId(0),
            reviewer: ReviewerId(0)
        }
    ));
    assert_eq!(s.active_proposer(), Some("A"));

    // B outranks A on 1's list, so A gets bumped.
    assert!(matches!(
        s.step(),
        StepOutcome::Displaced {
            proposer: ProposerId(1),
            reviewer: ReviewerId(0),
            displaced: ProposerId(0)
        }
    ));
    assert!(mutual(&s));

    assert!(matches!(s.step(), StepOutcome::Accepted { .. }));
    assert!(matches!(s.step(), StepOutcome::Terminated));
    assert!(s.is_done());
    assert_eq!(s.steps(), 3);
    assert_eq!(s.pairs(), vec![("A", "2"), ("B", "1")]);

    let lines: Vec<&str> = s.trace().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "A proposes to 1. 1 is free and accepts.",
            "B proposes to 1. 1 prefers B over A; A is rejected.",
            "A proposes to 2. 2 is free and accepts.",
            "All participants matched. Algorithm terminates.",
        ]
    );
    // The displaced proposer records who turned it down.
    assert_eq!(s.proposers()[0].rejected_by, vec![ReviewerId(0)]);
}

#[test]
fn rejection_leaves_reviewer_with_current_partner() {
    let proposers = side(&[("A", &["1", "2"]), ("B", &["1", "2"])]);
    let reviewers = side(&[("1", &["A", "B"]), ("2", &["A", "B"])]);
    let mut s = MatchingState::new(&proposers, &reviewers).unwrap();
    s.step(); // A takes 1
    assert!(matches!(
        s.step(),
        StepOutcome::Rejected {
            proposer: ProposerId(1),
            reviewer: ReviewerId(0)
        }
    ));
    assert_eq!(
        s.trace()[1].text,
        "B proposes to 1. 1 prefers A; B is rejected."
    );
    assert_eq!(s.proposers()[1].rejected_by, vec![ReviewerId(0)]);
    s.run_to_completion();
    assert_eq!(s.pairs(), vec![("A", "1"), ("B", "2")]);
}

#[test]
fn proposer_optimal_on_cyclic_instance() {
    // Every proposer's first choice differs from every reviewer's first
    // choice; the proposer-optimal matching hands each proposer its top
    // pick and each reviewer its bottom one.
    let proposers = side(&[
        ("A", &["1", "2", "3"]),
        ("B", &["2", "3", "1"]),
        ("C", &["3", "1", "2"]),
    ]);
    let reviewers = side(&[
        ("1", &["B", "C", "A"]),
        ("2", &["C", "A", "B"]),
        ("3", &["A", "B", "C"]),
    ]);
    let mut s = MatchingState::new(&proposers, &reviewers).unwrap();
    s.run_to_completion();
    assert_eq!(s.pairs(), vec![("A", "1"), ("B", "2"), ("C", "3")]);
    assert!(blocking_pairs(&s).is_empty());
}

#[test]
fn empty_instance_terminates_immediately() {
    let mut s = MatchingState::new(&[], &[]).unwrap();
    assert!(matches!(s.step(), StepOutcome::Terminated));
    assert!(s.is_done());
    assert_eq!(s.steps(), 0);
    assert_eq!(s.trace().len(), 1);
    assert!(blocking_pairs(&s).is_empty());
    // Terminal states are frozen; further steps change nothing.
    let before = s.trace().len();
    assert!(matches!(s.step(), StepOutcome::Terminated));
    assert_eq!(s.trace().len(), before);
}

#[test]
fn single_pair() {
    let mut s = MatchingState::new(&side(&[("A", &["1"])]), &side(&[("1", &["A"])])).unwrap();
    assert_eq!(s.run_to_completion(), 1);
    assert_eq!(s.pairs(), vec![("A", "1")]);
}

#[test]
fn stability_check_is_silent_before_termination() {
    // 1 would rather have B, and B ranks 1 first: a blocking pair exists
    // mid-run, but the check only speaks for finished matchings.
    let proposers = side(&[("A", &["1", "2"]), ("B", &["1", "2"])]);
    let reviewers = side(&[("1", &["B", "A"]), ("2", &["B", "A"])]);
    let mut s = MatchingState::new(&proposers, &reviewers).unwrap();
    s.step();
    assert!(!s.is_done());
    assert!(blocking_pairs(&s).is_empty());
}

#[test]
fn unequal_sides_exhaust_and_terminate() {
    // Two proposers compete for one reviewer; the loser runs out of
    // candidates and the run ends with someone unmatched.
    let proposers = side(&[("A", &["1"]), ("B", &["1"])]);
    let reviewers = side(&[("1", &["A", "B"])]);
    let mut s = MatchingState::new(&proposers, &reviewers).unwrap();
    s.run_to_completion();
    assert_eq!(s.pairs(), vec![("A", "1")]);
    assert!(s.proposers()[1].matched.is_none());
    assert_eq!(
        s.trace().last().unwrap().text,
        "All free proposers exhausted their lists. Algorithm terminates."
    );
    assert!(blocking_pairs(&s).is_empty());
}

#[test]
fn validation_rejects_malformed_tables() {
    let reviewers = side(&[("1", &["A"]), ("2", &["A"])]);

    let short = MatchingState::new(&side(&[("A", &["1"])]), &reviewers);
    assert!(matches!(short, Err(PrefsError::WrongLength { .. })));

    let dup = MatchingState::new(&side(&[("A", &["1", "1"])]), &reviewers);
    assert!(matches!(dup, Err(PrefsError::DuplicateEntry { .. })));

    let unknown = MatchingState::new(&side(&[("A", &["1", "9"])]), &reviewers);
    assert!(matches!(unknown, Err(PrefsError::UnknownLabel { .. })));

    let relabel = MatchingState::new(
        &side(&[("A", &["1", "2"]), ("A", &["2", "1"])]),
        &side(&[("1", &["A", "A"]), ("2", &["A", "A"])]),
    );
    assert!(matches!(relabel, Err(PrefsError::DuplicateLabel { .. })));
}

#[test]
fn mutuality_holds_at_every_reachable_state() {
    for index in 0..10 {
        let (pp, rp) = draw_preferences(
            PrefsCfg {
                pairs: PairCount::Fixed(6),
            },
            ReplayToken { seed: 77, index },
        );
        let mut s = MatchingState::new(&pp, &rp).unwrap();
        assert!(mutual(&s));
        while !s.is_done() {
            s.step();
            assert!(mutual(&s));
        }
    }
}

#[test]
fn termination_within_quadratic_bound() {
    for n in 1..=10usize {
        for index in 0..5 {
            let (pp, rp) = draw_preferences(
                PrefsCfg {
                    pairs: PairCount::Fixed(n),
                },
                ReplayToken {
                    seed: 5,
                    index: index + ((n as u64) << 8),
                },
            );
            let mut s = MatchingState::new(&pp, &rp).unwrap();
            let steps = s.run_to_completion();
            assert!(steps <= n * n, "n={n}: {steps} steps exceeds n^2");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deferred_acceptance_is_stable(n in 1usize..=10, seed in any::<u64>()) {
        let (pp, rp) = draw_preferences(
            PrefsCfg { pairs: PairCount::Fixed(n) },
            ReplayToken { seed, index: 0 },
        );
        let mut s = MatchingState::new(&pp, &rp).unwrap();
        let steps = s.run_to_completion();
        prop_assert!(s.is_done());
        prop_assert!(steps <= n * n);
        // Equal-size sides: everyone ends up matched.
        prop_assert!(s.proposers().iter().all(|p| p.matched.is_some()));
        prop_assert!(blocking_pairs(&s).is_empty());
    }
}
