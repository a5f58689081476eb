//! Planar geometry for the splitter.
//!
//! Purpose
//! - `Polygon`: validated closed vertex loop with a known winding.
//! - Line/segment intersection with an explicit parallel signal and
//!   scale-aware tolerances (`GeomCfg`).
//!
//! Code cross-refs: `split::{find_reflex_vertex, select_diagonal, partition}`

mod intersect;
mod polygon;
mod types;

pub use intersect::{line_intersection, segments_cross, LineIntersection};
pub use polygon::Polygon;
pub use types::{GeomCfg, Point, Winding};
