//! JSON state snapshots for the rendering layer.
//!
//! The animation shell doesn't link the algorithm crate directly in every
//! context (static builds bake instances ahead of time), so finished runs
//! are serialized here in exactly the shape the widgets render: labeled
//! participants with preferences/matches/rejections plus the trace, and
//! identified points plus the hull walk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use vizcore::api::{hull_points, BlockingPair, MatchingState, Point, PointId};

#[derive(Serialize)]
struct ParticipantSnap {
    label: String,
    prefs: Vec<String>,
    matched: Option<String>,
    rejected_by: Vec<String>,
}

#[derive(Serialize)]
struct TraceSnap {
    step: usize,
    text: String,
}

#[derive(Serialize)]
struct MatchingSnap {
    version: &'static str,
    steps: usize,
    done: bool,
    proposers: Vec<ParticipantSnap>,
    reviewers: Vec<ParticipantSnap>,
    pairs: Vec<(String, String)>,
    trace: Vec<TraceSnap>,
    /// "P-R" display strings; empty for every deferred-acceptance run.
    blocking_pairs: Vec<String>,
}

#[derive(Serialize)]
struct PointSnap {
    id: usize,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct HullSnap {
    version: &'static str,
    points: Vec<PointSnap>,
    hull: Vec<usize>,
    /// Hull coordinates with the start repeated, ready to draw closed.
    ring: Vec<[f64; 2]>,
}

/// Write a finished matching run as pretty JSON.
pub fn write_matching(
    path: &Path,
    state: &MatchingState,
    blocking: &[BlockingPair],
) -> Result<PathBuf> {
    let snap = MatchingSnap {
        version: vizcore::VERSION,
        steps: state.steps(),
        done: state.is_done(),
        proposers: state
            .proposers()
            .iter()
            .map(|p| ParticipantSnap {
                label: p.label.clone(),
                prefs: p.prefs.iter().map(|r| reviewer_label(state, r.0)).collect(),
                matched: p.matched.map(|r| reviewer_label(state, r.0)),
                rejected_by: p
                    .rejected_by
                    .iter()
                    .map(|r| reviewer_label(state, r.0))
                    .collect(),
            })
            .collect(),
        reviewers: state
            .reviewers()
            .iter()
            .map(|r| ParticipantSnap {
                label: r.label.clone(),
                prefs: r.prefs.iter().map(|p| proposer_label(state, p.0)).collect(),
                matched: r.matched.map(|p| proposer_label(state, p.0)),
                rejected_by: r
                    .rejected_by
                    .iter()
                    .map(|p| proposer_label(state, p.0))
                    .collect(),
            })
            .collect(),
        pairs: state
            .pairs()
            .into_iter()
            .map(|(p, r)| (p.to_string(), r.to_string()))
            .collect(),
        trace: state
            .trace()
            .iter()
            .map(|t| TraceSnap {
                step: t.step,
                text: t.text.clone(),
            })
            .collect(),
        blocking_pairs: blocking
            .iter()
            .map(|b| format!("{}-{}", b.proposer, b.reviewer))
            .collect(),
    };
    write_json(path, &snap)
}

/// Write a scatter and its hull walk as pretty JSON.
pub fn write_hull(path: &Path, points: &[Point], hull: &[PointId]) -> Result<PathBuf> {
    let mut ring: Vec<[f64; 2]> = hull_points(points, hull)
        .iter()
        .map(|p| [p.pos.x, p.pos.y])
        .collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    let snap = HullSnap {
        version: vizcore::VERSION,
        points: points
            .iter()
            .map(|p| PointSnap {
                id: p.id.0,
                x: p.pos.x,
                y: p.pos.y,
            })
            .collect(),
        hull: hull.iter().map(|id| id.0).collect(),
        ring,
    };
    write_json(path, &snap)
}

fn reviewer_label(state: &MatchingState, i: usize) -> String {
    state.reviewers()[i].label.clone()
}

fn proposer_label(state: &MatchingState, i: usize) -> String {
    state.proposers()[i].label.clone()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating snapshot dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}
