//! Crossing test for perpendicular axis-aligned segments.

use super::types::{Axis, Coord, Segment};

/// Crossing point of two perpendicular segments, if they truly cross.
///
/// Exactly one of `l1`, `l2` must be vertical and the other horizontal;
/// rectangle edges are the only inputs this crate ever builds, and they
/// always satisfy that. The candidate x is the vertical segment's x and
/// is accepted only strictly inside the horizontal segment's x-interval;
/// the candidate y is the horizontal segment's y and is accepted only
/// strictly inside the vertical segment's y-interval. Segments that
/// merely touch at an endpoint do not cross.
///
/// Absence is `None`, never a sentinel value: a crossing at `(0, 0)` is
/// `Some` like any other point.
pub fn segment_crossing(l1: Segment, l2: Segment) -> Option<Coord> {
    let vertical = if l1.is_vertical() { l1 } else { l2 };
    let horizontal = if l1.is_horizontal() { l1 } else { l2 };

    let (lo, hi) = horizontal.span(Axis::X);
    let x = vertical.a.x;
    if !(lo < x && x < hi) {
        return None;
    }

    let (lo, hi) = vertical.span(Axis::Y);
    let y = horizontal.a.y;
    if !(lo < y && y < hi) {
        return None;
    }

    Some(Coord::new(x, y))
}
