//! Concave polygon splitting and circle rasterization.
//!
//! Purpose
//! - Split a simple polygon with one reflex vertex into two parts along an
//!   interior diagonal from that vertex.
//! - Rasterize circles (midpoint algorithm) and sample circle polylines for an
//!   immediate-mode renderer.
//!
//! Rendering itself lives outside this crate: callers receive plain vertex
//! lists and draw them however they like.

pub mod error;
pub mod geom2;
pub mod raster;
pub mod scene;
pub mod split;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{RasterError, SplitError};
pub use geom2::{GeomCfg, Point, Polygon, Winding};
pub use split::{split, split_points, Decomposition, Diagonal, Split};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        line_intersection, segments_cross, GeomCfg, LineIntersection, Point, Polygon, Winding,
    };
    pub use crate::raster::{circle_polyline, midpoint_circle, CircleStyle, Pixel};
    pub use crate::split::{
        find_reflex_vertex, partition, select_diagonal, split, split_points, Decomposition,
        Diagonal, Split,
    };
    pub use crate::{RasterError, SplitError};
    pub use nalgebra::Vector2 as Vec2;
}

/// Z-component of `(b − a) × (c − b)`: the turn taken at `b` when walking `a → b → c`.
/// Positive for a left (counterclockwise) turn, negative for a right turn.
#[inline]
pub fn turn_cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}
