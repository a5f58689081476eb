//! Basic 2D types and tolerances.
//!
//! - `Point`: plain `Vector2<f64>`; coordinates are the only identity.
//! - `GeomCfg`: centralizes epsilons for the degenerate checks.
//! - `Winding`: traversal direction of a closed vertex loop.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// Both thresholds are relative: `eps_det` bounds the sine of the angle between
/// two directions, `eps_on_segment` is slack on the segment parameter in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_det: f64,
    pub eps_on_segment: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_on_segment: 1e-9,
        }
    }
}

/// Rotational direction of a vertex loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// From a signed area; `None` when the area is zero.
    #[inline]
    pub fn from_signed_area(area: f64) -> Option<Self> {
        if area > 0.0 {
            Some(Self::CounterClockwise)
        } else if area < 0.0 {
            Some(Self::Clockwise)
        } else {
            None
        }
    }

    /// +1 for counterclockwise, −1 for clockwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }
}
