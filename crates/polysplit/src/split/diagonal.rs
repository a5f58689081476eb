use crate::error::SplitError;
use crate::geom2::{segments_cross, GeomCfg, Polygon};

use super::Diagonal;

/// First vertex (by index) that can be joined to `reflex` by a valid diagonal.
///
/// Candidates skip `reflex` and its two neighbors. First fit: no preference
/// for length or balance of the resulting parts.
pub fn select_diagonal(
    poly: &Polygon,
    reflex: usize,
    cfg: GeomCfg,
) -> Result<Diagonal, SplitError> {
    if reflex >= poly.len() {
        return Err(SplitError::invalid(format!(
            "reflex index {reflex} out of range for {} vertices",
            poly.len()
        )));
    }
    (0..poly.len())
        .filter(|&s| !poly.are_adjacent(reflex, s))
        .find(|&s| is_valid_diagonal(poly, reflex, s, cfg))
        .map(|split| Diagonal { reflex, split })
        .ok_or(SplitError::NoValidDiagonal { reflex })
}

/// Segment `i–j` crosses no edge that avoids both endpoints, and its midpoint
/// is inside the polygon.
pub fn is_valid_diagonal(poly: &Polygon, i: usize, j: usize, cfg: GeomCfg) -> bool {
    if poly.are_adjacent(i, j) {
        return false;
    }
    let a = poly.vertex(i);
    let b = poly.vertex(j);
    let crosses = poly.edges().any(|(k, p, q)| {
        let k1 = poly.next(k);
        // edges at the diagonal's own endpoints touch it by construction
        if k == i || k == j || k1 == i || k1 == j {
            return false;
        }
        segments_cross(a, b, p, q, cfg)
    });
    !crosses && poly.contains((a + b) * 0.5)
}
