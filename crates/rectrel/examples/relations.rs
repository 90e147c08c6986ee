//! Walk through the three pairwise queries on a few rectangle pairs.
//!
//! Usage:
//!   cargo run -p rectrel --example relations -- fixed
//!   cargo run -p rectrel --example relations -- random
//!
//! Prints crossings, containment, and adjacency per pair:
//! - fixed mode: a handful of hand-picked configurations
//! - random mode: sampled pairs with a summary count

use rectrel::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "fixed".to_string());
    match mode.as_str() {
        "fixed" => show_fixed_pairs(),
        "random" => show_random_pairs(),
        _ => {
            eprintln!("usage: relations [fixed|random]");
        }
    }
}

fn point(p: Coord) -> String {
    format!("({}, {})", p.x, p.y)
}

fn show_pair(label: &str, a: &Rect, b: &Rect) {
    let crossings: Vec<String> = a.intersections(b).into_iter().map(point).collect();
    println!(
        "{label}: crossings=[{}], contains={}, adjacency={:?}",
        crossings.join(", "),
        a.contains(b),
        a.adjacency(b)
    );
}

fn show_fixed_pairs() {
    let base = Rect::new(Coord::new(0, 0), Coord::new(10, 10)).unwrap();
    let overlapping = Rect::new(Coord::new(5, 5), Coord::new(15, 15)).unwrap();
    let nested = Rect::new(Coord::new(1, 1), Coord::new(5, 5)).unwrap();
    let stacked = Rect::new(Coord::new(0, 10), Coord::new(10, 12)).unwrap();
    let offset = Rect::new(Coord::new(5, 10), Coord::new(11, 13)).unwrap();

    show_pair("overlapping", &base, &overlapping);
    show_pair("nested", &base, &nested);
    show_pair("stacked", &base, &stacked);
    show_pair("offset", &base, &offset);

    // The one rejected input: an unordered corner pair.
    match Rect::new(Coord::new(3, 3), Coord::new(1, 8)) {
        Ok(_) => println!("unexpected: inverted pair accepted"),
        Err(e) => println!("rejected: {e}"),
    }
}

fn show_random_pairs() {
    let cfg = RectCfg::default();
    let mut adjacent = 0usize;
    let mut crossing = 0usize;
    for index in 0..10 {
        let (a, b) = draw_pair(cfg, ReplayToken { seed: 2025, index });
        show_pair(&format!("sample {index}"), &a, &b);
        if a.adjacency(&b) != Adjacency::NonAdjacent {
            adjacent += 1;
        }
        if !a.intersections(&b).is_empty() {
            crossing += 1;
        }
    }
    println!("summary: {crossing}/10 crossing, {adjacent}/10 adjacent");
}
