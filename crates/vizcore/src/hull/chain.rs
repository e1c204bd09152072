//! Andrew's monotone chain.

use nalgebra::Vector2;

use super::types::{Point, PointId};

/// Convex hull of `points`, returned as ids of the boundary vertices in
/// counter-clockwise order starting from the lowest-leftmost point, open
/// (the start is not repeated at the end).
///
/// Turn test is strict: exactly-collinear boundary points are dropped.
/// Fewer than three points come back unchanged, in input order.
pub fn convex_hull(points: &[Point]) -> Vec<PointId> {
    if points.len() < 3 {
        return points.iter().map(|p| p.id).collect();
    }
    let mut pts: Vec<&Point> = points.iter().collect();
    pts.sort_by(|a, b| {
        match a
            .pos
            .x
            .partial_cmp(&b.pos.x)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a
                .pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });

    let mut lower: Vec<&Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2].pos, lower[lower.len() - 1].pos, p.pos) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<&Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2].pos, upper[upper.len() - 1].pos, p.pos) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }
    // Each chain's last point is the other chain's first.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower.into_iter().map(|p| p.id).collect()
}

/// Resolve hull ids back to points, in hull order. Ids not present in
/// `points` are skipped; `convex_hull` output never contains any.
pub fn hull_points(points: &[Point], ids: &[PointId]) -> Vec<Point> {
    ids.iter()
        .filter_map(|id| points.iter().find(|p| p.id == *id))
        .copied()
        .collect()
}

/// Signed area of the parallelogram (a−o)×(b−o); positive for a
/// counter-clockwise turn o→a→b.
#[inline]
pub(super) fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}
