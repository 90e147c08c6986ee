//! Axis-aligned rectangles on the integer plane and their pairwise
//! relationships.
//!
//! The crate answers three questions about a pair of rectangles:
//! - where do their boundaries cross ([`Rect::intersections`]),
//! - does one strictly enclose the other ([`Rect::contains`]),
//! - do they share a boundary segment, and how ([`Rect::adjacency`]).
//!
//! Coordinates are exact (`i64`), so every comparison is exact and no
//! tolerance handling exists anywhere. Rectangles are immutable value
//! types validated once at construction; all queries are pure functions
//! of their two arguments and safe to call from any thread.

pub mod geom;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers rarely need the module paths.
pub use geom::{segment_crossing, Axis, Coord, Segment};
pub use rect::{Adjacency, InvalidRect, Rect};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{segment_crossing, Axis, Coord, Segment};
    pub use crate::rect::rand::{draw_pair, draw_rect, RectCfg, ReplayToken};
    pub use crate::rect::{Adjacency, InvalidRect, Rect};
}
