use nalgebra::Vector2;

/// Opaque point identifier; what the renderer's pointer sequence names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub usize);

/// An identified 2D point. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id: PointId(id),
            pos: Vector2::new(x, y),
        }
    }
}
