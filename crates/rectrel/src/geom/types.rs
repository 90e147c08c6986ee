//! Basic plane types: `Coord`, `Axis`, `Segment`.

use nalgebra::Vector2;

/// Exact point on the integer plane. Value equality only, no identity.
pub type Coord = Vector2<i64>;

/// Projection axis for span comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `p` along this axis.
    #[inline]
    pub fn of(self, p: Coord) -> i64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Line segment as an ordered pair of endpoints (not normalized).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub a: Coord,
    pub b: Coord,
}

impl Segment {
    #[inline]
    pub fn new(a: Coord, b: Coord) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    /// Endpoints sorted ascending along `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (i64, i64) {
        let (u, v) = (axis.of(self.a), axis.of(self.b));
        if u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }
}
