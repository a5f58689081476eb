//! Demo scene data and small polygon generators.
//!
//! - `arrowhead`: the canonical five-vertex polygon with one reflex vertex.
//! - `regular_polygon`, `single_notch`: deterministic convex / one-notch shapes.
//! - `random_single_notch`: seeded draw for tests and benchmarks.
//! - `demo_circles`: the two circles of the rasterization demo.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SplitError;
use crate::geom2::{Point, Polygon};
use crate::raster::{CircleStyle, Pixel};

/// Vertices of the arrowhead polygon (clockwise; vertex 3 is reflex).
pub const ARROWHEAD: [(f64, f64); 5] = [
    (100.0, 200.0),
    (150.0, 250.0),
    (200.0, 200.0),
    (150.0, 150.0),
    (150.0, 100.0),
];

/// Horizontal offset used to draw the split parts next to the original.
pub const SPLIT_OFFSET_X: f64 = 350.0;

pub fn arrowhead() -> Result<Polygon, SplitError> {
    Polygon::from_xy(&ARROWHEAD)
}

/// Regular `n`-gon, counterclockwise, first vertex at angle `phase`.
pub fn regular_polygon(
    n: usize,
    center: Point,
    radius: f64,
    phase: f64,
) -> Result<Polygon, SplitError> {
    Polygon::new(ring(n, center, radius, phase).collect())
}

/// Regular `n`-gon with vertex `notch` pulled toward the center to
/// `depth * radius`. The notch is reflex when `depth < cos(2π/n)`.
pub fn single_notch(
    n: usize,
    radius: f64,
    notch: usize,
    depth: f64,
    phase: f64,
) -> Result<Polygon, SplitError> {
    let vertices = ring(n, Vector2::zeros(), radius, phase)
        .enumerate()
        .map(|(i, p)| if i == notch { p * depth } else { p })
        .collect();
    Polygon::new(vertices)
}

/// Parameters of a seeded one-notch polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchParams {
    pub n: usize,
    pub radius: f64,
    pub notch: usize,
    pub depth: f64,
    pub phase: f64,
}

impl NotchParams {
    /// Draw parameters that always yield exactly one reflex vertex.
    pub fn sample(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(5..=16);
        Self {
            n,
            radius: rng.gen_range(1.0..100.0),
            notch: rng.gen_range(0..n),
            depth: rng.gen_range(0.05..0.25),
            phase: rng.gen::<f64>() * TAU,
        }
    }

    pub fn build(&self) -> Result<Polygon, SplitError> {
        single_notch(self.n, self.radius, self.notch, self.depth, self.phase)
    }
}

/// Seeded one-notch polygon; the same seed gives the same polygon.
pub fn random_single_notch(seed: u64) -> Result<Polygon, SplitError> {
    NotchParams::sample(seed).build()
}

/// A circle of the rasterization demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoCircle {
    pub center: Pixel,
    pub radius: i64,
    pub style: CircleStyle,
}

pub fn demo_circles() -> [DemoCircle; 2] {
    [
        DemoCircle {
            center: Pixel::new(-1, -1),
            radius: 6,
            style: CircleStyle::Fan,
        },
        DemoCircle {
            center: Pixel::new(3, 5),
            radius: 6,
            style: CircleStyle::Outline,
        },
    ]
}

fn ring(n: usize, center: Point, radius: f64, phase: f64) -> impl Iterator<Item = Point> {
    (0..n).map(move |k| {
        let angle = phase + TAU * (k as f64) / (n as f64);
        center + Vector2::new(angle.cos(), angle.sin()) * radius
    })
}
