//! Points, directed edges, and the comparison tolerance.
//!
//! - `Point`: plain `nalgebra` 2-vector, no identity beyond its coordinates.
//! - `Edge`: ordered pair `p0 → p1` with direction `p1 - p0`.
//! - `Tolerance`: the single epsilon behind every "≈ 0" comparison.

use nalgebra::Vector2;

/// A vertex of a polygon loop.
pub type Point = Vector2<f64>;

/// Absolute epsilon used when no scale information is available.
///
/// Bounds cross-product magnitudes in `point_on_segment`/`is_colinear` and is
/// reused as inclusive slack for bounding-box and coincidence tests.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Directed segment `p0 → p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub p0: Point,
    pub p1: Point,
}

impl Edge {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
    #[inline]
    pub fn dir(&self) -> Vector2<f64> {
        self.p1 - self.p0
    }
}

/// Floating tolerance for "on segment", "colinear" and "coincident" tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps: eps.abs() }
    }

    /// `DEFAULT_EPS` scaled by the largest coordinate magnitude (at least 1).
    ///
    /// Layout coordinates in the 1e4 range carry round-off far above 1e-9 once
    /// they went through a unit conversion; scaling keeps those inputs matching
    /// while leaving unit-scale inputs at the default.
    pub fn scaled_for(points: &[Point]) -> Self {
        let mag = points
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .filter(|m| m.is_finite())
            .fold(1.0_f64, f64::max);
        Self {
            eps: DEFAULT_EPS * mag,
        }
    }

    #[inline]
    pub fn is_zero(&self, v: f64) -> bool {
        v.abs() <= self.eps
    }

    /// Both coordinates agree within `eps`.
    #[inline]
    pub fn coincident(&self, a: Point, b: Point) -> bool {
        self.is_zero(a.x - b.x) && self.is_zero(a.y - b.y)
    }
}
