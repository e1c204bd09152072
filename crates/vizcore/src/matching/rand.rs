//! Random preference tables (shuffled permutations + replay tokens).
//!
//! Purpose
//! - Back the "Randomize" button: draw a fresh instance the widget can
//!   animate, reproducible from its `(seed, index)` token.
//!
//! Model
//! - Proposers are labeled "A", "B", …; reviewers "1", "2", … as in the
//!   rendered demo. Each participant's list is an independent uniform
//!   shuffle of the opposite side's labels.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::replay::ReplayToken;

/// Instance size distribution (pairs per side).
#[derive(Clone, Copy, Debug)]
pub enum PairCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PairCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PairCount::Fixed(n) => n,
            PairCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Preference-table sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PrefsCfg {
    pub pairs: PairCount,
}

impl Default for PrefsCfg {
    fn default() -> Self {
        Self {
            // The demo animates four couples.
            pairs: PairCount::Fixed(4),
        }
    }
}

/// Draw a random instance as `(proposer_prefs, reviewer_prefs)`, ready
/// for `MatchingState::new`. Same token, same instance.
pub fn draw_preferences(
    cfg: PrefsCfg,
    tok: ReplayToken,
) -> (Vec<(String, Vec<String>)>, Vec<(String, Vec<String>)>) {
    let mut rng = tok.to_std_rng();
    let n = cfg.pairs.sample(&mut rng);
    let proposer_labels: Vec<String> = (0..n).map(proposer_label).collect();
    let reviewer_labels: Vec<String> = (0..n).map(|i| (i + 1).to_string()).collect();

    let proposers = proposer_labels
        .iter()
        .map(|label| {
            let mut prefs = reviewer_labels.clone();
            prefs.shuffle(&mut rng);
            (label.clone(), prefs)
        })
        .collect();
    let reviewers = reviewer_labels
        .iter()
        .map(|label| {
            let mut prefs = proposer_labels.clone();
            prefs.shuffle(&mut rng);
            (label.clone(), prefs)
        })
        .collect();
    (proposers, reviewers)
}

fn proposer_label(i: usize) -> String {
    if i < 26 {
        char::from(b'A' + i as u8).to_string()
    } else {
        format!("A{i}")
    }
}
