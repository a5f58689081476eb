use crate::geom2::{GeomCfg, Polygon};
use crate::turn_cross;

/// Index of the first reflex vertex in traversal order, or `None` if convex.
///
/// The turn `z = (b − a) × (c − b)` at each vertex is compared against the
/// polygon's winding: a vertex turning the opposite way is reflex. Near-zero
/// turns (collinear neighbors) are treated as convex.
pub fn find_reflex_vertex(poly: &Polygon, cfg: GeomCfg) -> Option<usize> {
    (0..poly.len()).find(|&i| is_reflex(poly, i, cfg))
}

/// All reflex vertices, in traversal order.
pub fn reflex_vertices(poly: &Polygon, cfg: GeomCfg) -> Vec<usize> {
    (0..poly.len()).filter(|&i| is_reflex(poly, i, cfg)).collect()
}

fn is_reflex(poly: &Polygon, i: usize, cfg: GeomCfg) -> bool {
    let a = poly.vertex(poly.prev(i));
    let b = poly.vertex(i);
    let c = poly.vertex(poly.next(i));
    let z = turn_cross(a, b, c) * poly.winding().sign();
    let scale = (b - a).norm() * (c - b).norm();
    z < -cfg.eps_det * scale
}
