//! Error types shared by the splitter and the rasterizer.

use std::fmt;

/// Why a polygon could not be split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitError {
    /// Input does not form a usable polygon (too few vertices, non-finite
    /// coordinates, repeated consecutive vertices, zero area).
    InvalidPolygon { reason: String },
    /// A reflex vertex exists but every candidate diagonal from it crosses the
    /// boundary or leaves the polygon.
    NoValidDiagonal { reflex: usize },
    /// The chosen diagonal would leave one side with fewer than three vertices.
    DegenerateSplit { reflex: usize, split: usize },
}

impl SplitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::NoValidDiagonal { reflex } => {
                write!(f, "no valid diagonal from reflex vertex {reflex}")
            }
            Self::DegenerateSplit { reflex, split } => write!(
                f,
                "diagonal {reflex}-{split} leaves a part with fewer than 3 vertices"
            ),
        }
    }
}

impl std::error::Error for SplitError {}

/// Invalid circle parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterError {
    NegativeRadius { radius: f64 },
    NonFinite,
    TooFewSegments { segments: usize },
    /// Radius or rim pixels do not fit in `i64`.
    OutOfRange { cx: i64, cy: i64, radius: i64 },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadius { radius } => write!(f, "radius must be >= 0, got {radius}"),
            Self::NonFinite => write!(f, "circle parameters must be finite"),
            Self::TooFewSegments { segments } => {
                write!(f, "need at least 3 segments, got {segments}")
            }
            Self::OutOfRange { cx, cy, radius } => write!(
                f,
                "circle of radius {radius} around ({cx}, {cy}) leaves the i64 pixel range"
            ),
        }
    }
}

impl std::error::Error for RasterError {}
