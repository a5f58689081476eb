//! Closed vertex loops (`Polygon`).
//!
//! Invariants (checked by `Polygon::new`):
//! - at least three vertices, all coordinates finite;
//! - no two consecutive vertices coincide (last→first included);
//! - non-zero signed area, so the winding is well defined.

use nalgebra::Vector2;

use super::types::{Point, Winding};
use crate::error::SplitError;

/// Simple polygon as an ordered, implicitly closed vertex sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    winding: Winding,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, SplitError> {
        let n = vertices.len();
        if n < 3 {
            return Err(SplitError::invalid(format!(
                "need at least 3 vertices, got {n}"
            )));
        }
        if let Some(i) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(SplitError::invalid(format!(
                "vertex {i} has a non-finite coordinate"
            )));
        }
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(SplitError::invalid(format!(
                    "vertices {i} and {} coincide",
                    (i + 1) % n
                )));
            }
        }
        let winding = Winding::from_signed_area(shoelace(&vertices))
            .ok_or_else(|| SplitError::invalid("zero signed area"))?;
        Ok(Self { vertices, winding })
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self, SplitError> {
        Self::new(coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Vertex at a cyclic index.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i % self.vertices.len()]
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        let n = self.vertices.len();
        (i + n - 1) % n
    }

    /// True when `i` and `j` are the same vertex or neighbors in cyclic order.
    #[inline]
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        i == j || self.next(i) == j || self.prev(i) == j
    }

    /// Edges as `(start_index, start, end)`; edge `i` joins vertex `i` to `i + 1`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        (0..self.vertices.len()).map(move |i| (i, self.vertices[i], self.vertex(i + 1)))
    }

    /// Shoelace signed area: positive for counterclockwise loops.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        shoelace(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Even–odd point-in-polygon test. Points on the boundary may go either way.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        for (_, a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Copy shifted by `(dx, dy)`, re-checked like `Polygon::new`.
    ///
    /// Fails when the offset is non-finite, or so large that neighboring
    /// vertices round onto each other.
    pub fn translate(&self, dx: f64, dy: f64) -> Result<Polygon, SplitError> {
        let offset = Vector2::new(dx, dy);
        Polygon::new(self.vertices.iter().map(|p| p + offset).collect())
    }
}

fn shoelace(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * twice
}
