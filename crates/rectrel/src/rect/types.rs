//! `Rect` value type, corner derivation, and the construction error.

use thiserror::Error;

use crate::geom::{Coord, Segment};

/// Rejected rectangle construction: the corner pair violates
/// `bottom_left.x < top_right.x && bottom_left.y < top_right.y`.
///
/// Carries both offending coordinates for diagnostics.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error(
    "the provided pair of coordinates ({}, {}), ({}, {}) do not represent a valid rectangle",
    .bottom_left.x, .bottom_left.y, .top_right.x, .top_right.y
)]
pub struct InvalidRect {
    pub bottom_left: Coord,
    pub top_right: Coord,
}

/// Axis-aligned rectangle, immutable once constructed.
///
/// Invariants (enforced by [`Rect::new`]):
/// - `bottom_left.x < top_right.x && bottom_left.y < top_right.y`;
///   degenerate (zero width/height) and inverted corner pairs never exist.
/// - Derived corners: `top_left = (bl.x, tr.y)`, `bottom_right = (tr.x, bl.y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    bottom_left: Coord,
    top_right: Coord,
    top_left: Coord,
    bottom_right: Coord,
}

impl Rect {
    /// Build a rectangle from its bottom-left and top-right corners,
    /// deriving the remaining two. The only fallible operation in the
    /// crate: every query below is total over constructed values.
    pub fn new(bottom_left: Coord, top_right: Coord) -> Result<Self, InvalidRect> {
        if !(bottom_left.x < top_right.x && bottom_left.y < top_right.y) {
            return Err(InvalidRect {
                bottom_left,
                top_right,
            });
        }
        Ok(Self {
            bottom_left,
            top_right,
            top_left: Coord::new(bottom_left.x, top_right.y),
            bottom_right: Coord::new(top_right.x, bottom_left.y),
        })
    }

    #[inline]
    pub fn bottom_left(&self) -> Coord {
        self.bottom_left
    }

    #[inline]
    pub fn top_right(&self) -> Coord {
        self.top_right
    }

    #[inline]
    pub fn top_left(&self) -> Coord {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Coord {
        self.bottom_right
    }

    #[inline]
    pub fn left(&self) -> i64 {
        self.bottom_left.x
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.top_right.x
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.bottom_left.y
    }

    #[inline]
    pub fn top(&self) -> i64 {
        self.top_right.y
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.right() - self.left()
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.top() - self.bottom()
    }

    /// Corners clockwise starting at the top-left.
    #[inline]
    pub fn corners(&self) -> [Coord; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    // Boundary edges; endpoints run bottom-to-top and left-to-right.

    #[inline]
    pub(crate) fn left_edge(&self) -> Segment {
        Segment::new(self.bottom_left, self.top_left)
    }

    #[inline]
    pub(crate) fn right_edge(&self) -> Segment {
        Segment::new(self.bottom_right, self.top_right)
    }

    #[inline]
    pub(crate) fn bottom_edge(&self) -> Segment {
        Segment::new(self.bottom_left, self.bottom_right)
    }

    #[inline]
    pub(crate) fn top_edge(&self) -> Segment {
        Segment::new(self.top_left, self.top_right)
    }
}
