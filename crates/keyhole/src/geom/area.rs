//! Signed area, orientation, point location and the simplicity check for closed loops.

use super::predicates::{cross, point_on_segment, segments_intersect};
use super::types::{Edge, Point, Tolerance};

/// Traversal direction of a closed loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

impl Orientation {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
        }
    }

    /// +1 for CCW, -1 for CW; matches the sign of the signed area.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
        }
    }

    /// Orientation from the signed area; `None` for (numerically) zero area.
    pub fn of(points: &[Point]) -> Option<Self> {
        let a = signed_area(points);
        if a > 0.0 {
            Some(Orientation::CounterClockwise)
        } else if a < 0.0 {
            Some(Orientation::Clockwise)
        } else {
            None
        }
    }
}

/// Shoelace area of the implicitly closed loop; positive for CCW.
///
/// Coordinates are taken relative to the first vertex so large offsets (layout
/// databases) do not cancel away the significant digits.
pub fn signed_area(points: &[Point]) -> f64 {
    let Some(&origin) = points.first() else {
        return 0.0;
    };
    let n = points.len();
    let mut twice = 0.0;
    for k in 0..n {
        let a = points[k] - origin;
        let b = points[(k + 1) % n] - origin;
        twice += cross(a, b);
    }
    0.5 * twice
}

/// No two non-adjacent edges of the closed loop touch or cross.
///
/// O(n²); meant for validating outputs, not for the scan itself.
pub fn is_simple(points: &[Point], tol: Tolerance) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let edge = |k: usize| Edge::new(points[k], points[(k + 1) % n]);
    for a in 0..n {
        for b in (a + 1)..n {
            let adjacent = b == a + 1 || (a == 0 && b == n - 1);
            if adjacent {
                continue;
            }
            if segments_intersect(&edge(a), &edge(b), tol) {
                return false;
            }
        }
    }
    true
}

/// Position of a point relative to a closed loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Outside,
    Boundary,
}

/// Even-odd crossing test; `Boundary` when `p` is within `tol` of an edge.
pub fn locate(p: Point, points: &[Point], tol: Tolerance) -> Location {
    let n = points.len();
    let mut inside = false;
    for k in 0..n {
        let a = points[(k + n - 1) % n];
        let b = points[k];
        if point_on_segment(p, &Edge::new(a, b), tol) {
            return Location::Boundary;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    if inside {
        Location::Inside
    } else {
        Location::Outside
    }
}
