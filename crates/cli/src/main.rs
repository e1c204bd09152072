use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use vizcore::api::{
    blocking_pairs, convex_hull, draw_points, draw_preferences, MatchingState, PairCount,
    PrefsCfg, ReplayToken, ScatterCfg,
};

mod snapshot;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Demo runner for the visualization algorithm core")]
struct Cmd {
    /// Seed for reproducible instances
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Replay index under the seed
    #[arg(long, default_value_t = 0)]
    index: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run deferred acceptance to completion and print the trace
    Matching {
        /// Pairs per side
        #[arg(long, default_value_t = 4)]
        pairs: usize,
        /// Optional JSON snapshot path for the rendering layer
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Scatter points and compute their convex hull
    Hull {
        #[arg(long, default_value_t = 8)]
        points: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tok = ReplayToken {
        seed: cmd.seed,
        index: cmd.index,
    };
    match cmd.action {
        Action::Matching { pairs, out } => run_matching(pairs, tok, out),
        Action::Hull { points, out } => run_hull(points, tok, out),
    }
}

fn run_matching(pairs: usize, tok: ReplayToken, out: Option<PathBuf>) -> Result<()> {
    let (pp, rp) = draw_preferences(
        PrefsCfg {
            pairs: PairCount::Fixed(pairs),
        },
        tok,
    );
    let mut state = MatchingState::new(&pp, &rp)?;
    let steps = state.run_to_completion();
    for entry in state.trace() {
        tracing::info!(step = entry.step, "{}", entry.text);
    }
    let blocking = blocking_pairs(&state);
    tracing::info!(
        pairs,
        steps,
        blocking = blocking.len(),
        stable = blocking.is_empty(),
        "matching complete"
    );
    if let Some(path) = out {
        let written = snapshot::write_matching(&path, &state, &blocking)?;
        tracing::info!(path = %written.display(), "snapshot written");
    }
    Ok(())
}

fn run_hull(points: usize, tok: ReplayToken, out: Option<PathBuf>) -> Result<()> {
    let pts = draw_points(
        ScatterCfg {
            count: points,
            ..ScatterCfg::default()
        },
        tok,
    );
    let hull = convex_hull(&pts);
    let order: Vec<usize> = hull.iter().map(|id| id.0).collect();
    tracing::info!(points, vertices = hull.len(), ?order, "hull computed");
    if let Some(path) = out {
        let written = snapshot::write_hull(&path, &pts, &hull)?;
        tracing::info!(path = %written.display(), "snapshot written");
    }
    Ok(())
}
