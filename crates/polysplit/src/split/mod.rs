//! Concave polygon splitting along a single diagonal.
//!
//! Pipeline
//! - `find_reflex_vertex`: first vertex turning against the polygon's winding.
//! - `select_diagonal`: first non-adjacent vertex whose diagonal stays inside
//!   the polygon without crossing an edge.
//! - `partition`: walk both arcs between the diagonal's endpoints.
//!
//! Only polygons with one reflex vertex are guaranteed to come out as two
//! convex parts. With several reflex vertices the first one is used and the
//! parts may still be concave.
//!
//! Code cross-refs: `geom2::{Polygon, segments_cross, GeomCfg}`

mod diagonal;
mod partition;
mod reflex;

pub use diagonal::{is_valid_diagonal, select_diagonal};
pub use partition::partition;
pub use reflex::{find_reflex_vertex, reflex_vertices};

use crate::error::SplitError;
use crate::geom2::{GeomCfg, Point, Polygon};

/// Split line between two non-adjacent vertices, by index into the source polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Diagonal {
    pub reflex: usize,
    pub split: usize,
}

impl Diagonal {
    /// Coordinates of both ends in `poly` (the polygon the indices refer to).
    #[inline]
    pub fn endpoints(&self, poly: &Polygon) -> (Point, Point) {
        (poly.vertex(self.reflex), poly.vertex(self.split))
    }
}

/// Two parts sharing the diagonal as an edge.
///
/// `first` runs forward from the reflex vertex to the split vertex, `second`
/// runs backward; both start at the reflex vertex and end at the split vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    pub first: Polygon,
    pub second: Polygon,
    pub diagonal: Diagonal,
}

/// Result of splitting a polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum Decomposition {
    /// No reflex vertex; the input is passed through unchanged.
    Convex(Polygon),
    Split(Split),
}

impl Decomposition {
    #[inline]
    pub fn diagonal(&self) -> Option<Diagonal> {
        match self {
            Self::Convex(_) => None,
            Self::Split(s) => Some(s.diagonal),
        }
    }

    /// Polygons to hand to a renderer: one when convex, two after a split.
    pub fn parts(&self) -> Vec<&Polygon> {
        match self {
            Self::Convex(p) => vec![p],
            Self::Split(s) => vec![&s.first, &s.second],
        }
    }
}

/// Split `poly` along a diagonal from its first reflex vertex.
///
/// Deterministic and free of hidden state: equal inputs give equal outputs.
pub fn split(poly: &Polygon, cfg: GeomCfg) -> Result<Decomposition, SplitError> {
    let diagonal = find_reflex_vertex(poly, cfg)
        .map(|reflex| select_diagonal(poly, reflex, cfg))
        .transpose()?;
    tracing::debug!(
        vertices = poly.len(),
        winding = ?poly.winding(),
        reflex = ?diagonal.map(|d| d.reflex),
        split = ?diagonal.map(|d| d.split),
        "split"
    );
    partition(poly, diagonal)
}

/// Validate raw vertices, then `split`.
pub fn split_points(vertices: &[Point], cfg: GeomCfg) -> Result<Decomposition, SplitError> {
    let poly = Polygon::new(vertices.to_vec())?;
    split(&poly, cfg)
}

#[cfg(test)]
mod tests;
