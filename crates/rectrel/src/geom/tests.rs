use proptest::prelude::*;

use super::*;

fn c(x: i64, y: i64) -> Coord {
    Coord::new(x, y)
}

#[test]
fn span_sorts_endpoints_either_order() {
    let s = Segment::new(c(7, 2), c(-3, 2));
    assert!(s.is_horizontal());
    assert!(!s.is_vertical());
    assert_eq!(s.span(Axis::X), (-3, 7));
    assert_eq!(s.span(Axis::Y), (2, 2));

    let s = Segment::new(c(4, 9), c(4, -1));
    assert!(s.is_vertical());
    assert_eq!(s.span(Axis::Y), (-1, 9));
}

#[test]
fn crossing_of_perpendicular_segments() {
    let horizontal = Segment::new(c(0, 1), c(5, 1));
    let vertical = Segment::new(c(3, 5), c(3, -5));
    assert_eq!(segment_crossing(horizontal, vertical), Some(c(3, 1)));
    // Argument order does not matter.
    assert_eq!(segment_crossing(vertical, horizontal), Some(c(3, 1)));
}

#[test]
fn no_crossing_when_segments_miss() {
    let horizontal = Segment::new(c(0, 1), c(5, 1));
    let vertical = Segment::new(c(3, 20), c(3, 25));
    assert_eq!(segment_crossing(horizontal, vertical), None);
}

#[test]
fn crossing_at_origin_is_reported() {
    // (0, 0) is a point like any other, not an absence marker.
    let horizontal = Segment::new(c(-2, 0), c(2, 0));
    let vertical = Segment::new(c(0, -2), c(0, 2));
    assert_eq!(segment_crossing(horizontal, vertical), Some(c(0, 0)));
}

#[test]
fn endpoint_touch_is_not_a_crossing() {
    let horizontal = Segment::new(c(0, 0), c(10, 0));
    // Vertical segment starts exactly on the horizontal one.
    let vertical = Segment::new(c(5, 0), c(5, 8));
    assert_eq!(segment_crossing(horizontal, vertical), None);
    // Vertical segment through the horizontal segment's endpoint.
    let vertical = Segment::new(c(10, -3), c(10, 3));
    assert_eq!(segment_crossing(horizontal, vertical), None);
}

proptest! {
    #[test]
    fn crossing_is_symmetric_in_argument_order(
        hx0 in -50i64..=50, hx1 in -50i64..=50, hy in -50i64..=50,
        vx in -50i64..=50, vy0 in -50i64..=50, vy1 in -50i64..=50,
    ) {
        prop_assume!(hx0 != hx1 && vy0 != vy1);
        let horizontal = Segment::new(c(hx0, hy), c(hx1, hy));
        let vertical = Segment::new(c(vx, vy0), c(vx, vy1));
        prop_assert_eq!(
            segment_crossing(horizontal, vertical),
            segment_crossing(vertical, horizontal)
        );
    }

    #[test]
    fn crossing_lies_strictly_inside_both_segments(
        hx0 in -50i64..=50, hx1 in -50i64..=50, hy in -50i64..=50,
        vx in -50i64..=50, vy0 in -50i64..=50, vy1 in -50i64..=50,
    ) {
        prop_assume!(hx0 != hx1 && vy0 != vy1);
        let horizontal = Segment::new(c(hx0, hy), c(hx1, hy));
        let vertical = Segment::new(c(vx, vy0), c(vx, vy1));
        if let Some(p) = segment_crossing(horizontal, vertical) {
            let (lo, hi) = horizontal.span(Axis::X);
            prop_assert!(lo < p.x && p.x < hi);
            let (lo, hi) = vertical.span(Axis::Y);
            prop_assert!(lo < p.y && p.y < hi);
            prop_assert_eq!(p, c(vx, hy));
        }
    }
}
