//! Random point scatters (uniform in a margin-inset rectangle).
//!
//! The demo scatters points inside its drawing viewport, keeping a margin
//! so markers and labels stay visible. Same token, same scatter.

use rand::Rng;

use super::types::Point;
use crate::replay::ReplayToken;

/// Scatter sampler configuration. Defaults mirror the demo viewport.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 8,
            width: 300.0,
            height: 200.0,
            margin: 20.0,
        }
    }
}

/// Draw `cfg.count` points with ids `0..count`, uniform over the inset
/// rectangle. Degenerate extents collapse to a thin strip rather than
/// failing; the hull is total over whatever comes out.
pub fn draw_points(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let m = cfg.margin.max(0.0);
    let w = (cfg.width - 2.0 * m).max(0.0);
    let h = (cfg.height - 2.0 * m).max(0.0);
    (0..cfg.count)
        .map(|i| {
            let x = m + rng.gen::<f64>() * w;
            let y = m + rng.gen::<f64>() * h;
            Point::new(i, x, y)
        })
        .collect()
}
