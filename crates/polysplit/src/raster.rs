//! Circle rasterization.
//!
//! - `midpoint_circle`: integer midpoint (Bresenham-style) circle, eight-way
//!   symmetric, returned as unique pixels ordered by angle.
//! - `circle_polyline`: evenly sampled points for an immediate-mode renderer,
//!   either a closed outline or a triangle fan with the center first.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::error::RasterError;
use crate::geom2::Point;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: i64,
    pub y: i64,
}

impl Pixel {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_point(self) -> Point {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

/// How a sampled circle is meant to be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleStyle {
    /// Triangle fan: center first, then the rim.
    Fan,
    /// Closed line loop over the rim only.
    Outline,
}

/// Largest radius whose decision variable (bounded by about `4 · radius`) fits in `i64`.
pub const MAX_RADIUS: i64 = i64::MAX / 4;

/// Pixels of the circle of `radius` around `center`, midpoint algorithm.
///
/// Fails with `OutOfRange` when the radius or any rim pixel does not fit in `i64`.
pub fn midpoint_circle(center: Pixel, radius: i64) -> Result<Vec<Pixel>, RasterError> {
    if radius < 0 {
        return Err(RasterError::NegativeRadius {
            radius: radius as f64,
        });
    }
    let out_of_range = || RasterError::OutOfRange {
        cx: center.x,
        cy: center.y,
        radius,
    };
    if radius > MAX_RADIUS {
        return Err(out_of_range());
    }
    let mut offsets: Vec<(i64, i64)> = Vec::new();
    let (mut x, mut y) = (0i64, radius);
    let mut d = 1 - radius;
    while x <= y {
        offsets.extend_from_slice(&[
            (x, y),
            (y, x),
            (-x, y),
            (-y, x),
            (x, -y),
            (y, -x),
            (-x, -y),
            (-y, -x),
        ]);
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
    }
    offsets.sort_by(|a, b| {
        offset_angle(*a)
            .total_cmp(&offset_angle(*b))
            .then_with(|| a.cmp(b))
    });
    offsets.dedup();
    offsets
        .into_iter()
        .map(|(dx, dy)| {
            let x = center.x.checked_add(dx)?;
            let y = center.y.checked_add(dy)?;
            Some(Pixel::new(x, y))
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(out_of_range)
}

/// Angle in [0, 2π) of an offset from the center.
#[inline]
fn offset_angle((dx, dy): (i64, i64)) -> f64 {
    (dy as f64).atan2(dx as f64).rem_euclid(TAU)
}

/// `segments + 1` evenly spaced rim points (the last repeats the first),
/// preceded by `center` for `CircleStyle::Fan`.
pub fn circle_polyline(
    center: Point,
    radius: f64,
    segments: usize,
    style: CircleStyle,
) -> Result<Vec<Point>, RasterError> {
    if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
        return Err(RasterError::NonFinite);
    }
    if radius < 0.0 {
        return Err(RasterError::NegativeRadius { radius });
    }
    if segments < 3 {
        return Err(RasterError::TooFewSegments { segments });
    }
    let mut pts = Vec::with_capacity(segments + 2);
    if style == CircleStyle::Fan {
        pts.push(center);
    }
    pts.extend((0..=segments).map(|i| {
        let angle = TAU * (i as f64) / (segments as f64);
        center + Vector2::new(angle.cos(), angle.sin()) * radius
    }));
    Ok(pts)
}
