//! The three pairwise queries and the span-overlap classifier behind
//! adjacency detection.

use crate::geom::{segment_crossing, Axis, Coord, Segment};

use super::types::Rect;

/// How two rectangles share a boundary, if at all.
///
/// `NonAdjacent` is the default and a valid outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// Shared sides coincide exactly.
    Proper,
    /// One shared side is strictly nested inside the other.
    SubLine,
    /// Shared sides overlap but neither contains the other.
    Partial,
    /// Candidate sides do not overlap, or no side pairing matched.
    NonAdjacent,
}

impl Rect {
    /// Points where the boundaries of `self` and `other` cross.
    ///
    /// Evaluates the 8 perpendicular edge pairings (each vertical edge of
    /// one rectangle against each horizontal edge of the other) and
    /// collects accepted crossings in evaluation order, without
    /// deduplication. An empty result means the boundaries do not cross;
    /// the rectangles may still be disjoint, nested, or adjacent.
    pub fn intersections(&self, other: &Rect) -> Vec<Coord> {
        let pairings = [
            (other.right_edge(), self.top_edge()),
            (other.right_edge(), self.bottom_edge()),
            (other.left_edge(), self.top_edge()),
            (other.left_edge(), self.bottom_edge()),
            (other.bottom_edge(), self.right_edge()),
            (other.bottom_edge(), self.left_edge()),
            (other.top_edge(), self.right_edge()),
            (other.top_edge(), self.left_edge()),
        ];
        pairings
            .into_iter()
            .filter_map(|(a, b)| segment_crossing(a, b))
            .collect()
    }

    /// True iff every corner of `other` lies strictly inside `self`'s
    /// open interior. Corners on the boundary do not count: touching is
    /// not containment.
    pub fn contains(&self, other: &Rect) -> bool {
        other.corners().into_iter().all(|corner| {
            self.left() < corner.x
                && corner.x < self.right()
                && self.bottom() < corner.y
                && corner.y < self.top()
        })
    }

    /// Classify how `self` and `other` share a side.
    ///
    /// Adjacency requires reciprocal sides on the same line: right-left,
    /// top-bottom, left-right, or bottom-top. Each pairing is triggered
    /// by an exact coordinate equality; a trigger delegates to the
    /// span-overlap classifier on the axis the shared sides run along.
    /// Rectangles that touch only at a corner classify as `NonAdjacent`,
    /// as do rectangles with no matching side pairing at all.
    pub fn adjacency(&self, other: &Rect) -> Adjacency {
        if self.bottom_right().x == other.top_left().x {
            span_overlap(self.right_edge(), other.left_edge(), Axis::Y)
        } else if self.top_right().y == other.bottom_left().y {
            span_overlap(self.top_edge(), other.bottom_edge(), Axis::X)
        } else if self.top_left().x == other.bottom_right().x {
            span_overlap(self.left_edge(), other.right_edge(), Axis::Y)
        } else if self.bottom_left().y == other.top_left().y {
            span_overlap(self.bottom_edge(), other.top_edge(), Axis::X)
        } else {
            Adjacency::NonAdjacent
        }
    }
}

/// Classify the overlap of two collinear segments along `axis`.
///
/// Endpoints are sorted per segment first, so either endpoint order is
/// accepted. Checks run in tie-break order Proper, SubLine, NonAdjacent,
/// Partial; only one condition holds for any real input pair.
/// Ranges that share a single endpoint do not overlap.
pub(crate) fn span_overlap(l1: Segment, l2: Segment, axis: Axis) -> Adjacency {
    let (lo1, hi1) = l1.span(axis);
    let (lo2, hi2) = l2.span(axis);

    // Same length and same start: the segments coincide.
    if hi1 - lo1 == hi2 - lo2 && lo1 == lo2 {
        return Adjacency::Proper;
    }
    // One segment strictly nested inside the other's open interval.
    if (lo1 < lo2 && hi2 < hi1) || (lo2 < lo1 && hi1 < hi2) {
        return Adjacency::SubLine;
    }
    // Disjoint ranges, endpoint contact included.
    if hi1 <= lo2 || hi2 <= lo1 {
        return Adjacency::NonAdjacent;
    }
    Adjacency::Partial
}
