//! Rectangle engine: validated axis-aligned rectangles and the three
//! pairwise relationship queries.
//!
//! Purpose
//! - `Rect` is constructed once from a bottom-left/top-right corner pair
//!   and is immutable afterwards; construction is the single validation
//!   point in the crate.
//! - Queries ([`Rect::intersections`], [`Rect::contains`],
//!   [`Rect::adjacency`]) are total pure functions over two constructed
//!   rectangles and never fail.
//!
//! Conventions
//! - Boundary contact is deliberately excluded from both crossing and
//!   containment: sides that touch belong to the adjacency classifier.

pub mod rand;

mod queries;
mod types;

pub use queries::Adjacency;
pub use types::{InvalidRect, Rect};
