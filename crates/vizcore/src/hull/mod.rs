//! Convex hulls over identified 2D points (Andrew's monotone chain).
//!
//! Purpose
//! - Back the pointer-network widget: given a scatter of labeled points,
//!   produce the boundary as an ordered id sequence the renderer walks
//!   while animating the "pointer output" row.
//!
//! The hull itself is a total function; every finite input, including
//! degenerate and all-collinear sets, has a defined result.

pub mod rand;

mod chain;
mod types;

pub use chain::{convex_hull, hull_points};
pub use rand::{draw_points, ScatterCfg};
pub use types::{Point, PointId};
