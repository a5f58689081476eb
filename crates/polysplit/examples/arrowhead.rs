//! Split the arrowhead polygon and print both parts side by side.
//!
//! Usage:
//!   cargo run -p polysplit --example arrowhead
//!
//! Prints the diagonal in original coordinates, then each part shifted right
//! the way the demo lays them out next to the original.

use polysplit::scene::{arrowhead, SPLIT_OFFSET_X};
use polysplit::{split, Decomposition, GeomCfg};

fn main() {
    let poly = arrowhead().unwrap();
    match split(&poly, GeomCfg::default()).unwrap() {
        Decomposition::Convex(p) => println!("convex, {} vertices", p.len()),
        Decomposition::Split(s) => {
            let (a, b) = s.diagonal.endpoints(&poly);
            println!(
                "diagonal {}-{}: ({}, {}) -> ({}, {})",
                s.diagonal.reflex, s.diagonal.split, a.x, a.y, b.x, b.y
            );
            for (name, part, dy) in [("first", &s.first, 50.0), ("second", &s.second, -50.0)] {
                let shifted = part.translate(SPLIT_OFFSET_X, dy).unwrap();
                let coords: Vec<String> = shifted
                    .vertices()
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                println!("{name}: {}", coords.join(" "));
            }
        }
    }
}
