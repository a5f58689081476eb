//! Line and segment intersection.
//!
//! - `line_intersection`: intersection of the infinite lines through two
//!   segments (Cramer's rule on the implicit forms `a·x + b·y = c`).
//! - `segments_cross`: bounded test built on top of it.
//!
//! Parallel detection compares `|det|` against `eps_det · |d1| · |d2|`, i.e. the
//! sine of the angle between the lines, so it does not depend on coordinate scale.

use super::types::{GeomCfg, Point};

/// Outcome of intersecting two infinite lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    Point(Point),
    /// No unique solution: the lines are parallel, coincident, or one of the
    /// segments has zero length.
    Parallel,
}

impl LineIntersection {
    #[inline]
    pub fn point(self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(p),
            Self::Parallel => None,
        }
    }
}

/// Intersection of the line through `p1, p2` with the line through `q1, q2`.
pub fn line_intersection(
    p1: Point,
    p2: Point,
    q1: Point,
    q2: Point,
    cfg: GeomCfg,
) -> LineIntersection {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = q2.y - q1.y;
    let b2 = q1.x - q2.x;
    let c2 = a2 * q1.x + b2 * q1.y;

    let det = a1 * b2 - a2 * b1;
    let scale = (p2 - p1).norm() * (q2 - q1).norm();
    if !det.is_finite() || det.abs() <= cfg.eps_det * scale {
        return LineIntersection::Parallel;
    }
    let x = (c1 * b2 - c2 * b1) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    LineIntersection::Point(Point::new(x, y))
}

/// True when the closed segments `[p1, p2]` and `[q1, q2]` share a point.
///
/// Touching at an endpoint counts. Collinear segments count when they overlap.
pub fn segments_cross(p1: Point, p2: Point, q1: Point, q2: Point, cfg: GeomCfg) -> bool {
    match line_intersection(p1, p2, q1, q2, cfg) {
        LineIntersection::Point(x) => {
            on_segment(p1, p2, x, cfg.eps_on_segment)
                && on_segment(q1, q2, x, cfg.eps_on_segment)
        }
        LineIntersection::Parallel => collinear_overlap(p1, p2, q1, q2, cfg),
    }
}

/// `x` is assumed to lie on the line through `a, b`; checks the parameter range.
#[inline]
fn on_segment(a: Point, b: Point, x: Point, eps: f64) -> bool {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return false;
    }
    let t = (x - a).dot(&d) / len2;
    (-eps..=1.0 + eps).contains(&t)
}

fn collinear_overlap(p1: Point, p2: Point, q1: Point, q2: Point, cfg: GeomCfg) -> bool {
    let d = p2 - p1;
    let len = d.norm();
    if len == 0.0 {
        return false;
    }
    for q in [q1, q2] {
        let w = q - p1;
        let cross = d.x * w.y - d.y * w.x;
        if cross.abs() > cfg.eps_det * len * w.norm().max(len) {
            return false;
        }
    }
    let len2 = len * len;
    let t1 = (q1 - p1).dot(&d) / len2;
    let t2 = (q2 - p1).dot(&d) / len2;
    let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
    hi >= -cfg.eps_on_segment && lo <= 1.0 + cfg.eps_on_segment
}
