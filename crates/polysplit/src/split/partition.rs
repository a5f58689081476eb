use crate::error::SplitError;
use crate::geom2::{Point, Polygon};

use super::{Decomposition, Diagonal, Split};

/// Cut `poly` along `diagonal`, or pass it through when there is none.
///
/// Each part contains both diagonal endpoints, so the vertex sets of the two
/// parts cover the polygon with only the endpoints counted twice.
pub fn partition(
    poly: &Polygon,
    diagonal: Option<Diagonal>,
) -> Result<Decomposition, SplitError> {
    let Some(d) = diagonal else {
        return Ok(Decomposition::Convex(poly.clone()));
    };
    let n = poly.len();
    if d.reflex >= n || d.split >= n {
        return Err(SplitError::invalid(format!(
            "diagonal {}-{} out of range for {n} vertices",
            d.reflex, d.split
        )));
    }
    let degenerate = || SplitError::DegenerateSplit {
        reflex: d.reflex,
        split: d.split,
    };
    let first = walk(poly, d.reflex, d.split, |i| poly.next(i));
    let second = walk(poly, d.reflex, d.split, |i| poly.prev(i));
    if first.len() < 3 || second.len() < 3 {
        return Err(degenerate());
    }
    let first = Polygon::new(first).map_err(|_| degenerate())?;
    let second = Polygon::new(second).map_err(|_| degenerate())?;
    Ok(Decomposition::Split(Split {
        first,
        second,
        diagonal: d,
    }))
}

/// Vertices from `from` to `to` inclusive, following `step`.
fn walk(poly: &Polygon, from: usize, to: usize, step: impl Fn(usize) -> usize) -> Vec<Point> {
    let mut out = vec![poly.vertex(from)];
    let mut i = from;
    while i != to {
        i = step(i);
        out.push(poly.vertex(i));
    }
    out
}
