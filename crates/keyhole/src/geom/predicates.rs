//! Stateless predicates on points and edges.
//!
//! Every tolerance-aware check used by the bridge scan lives here; callers do
//! not re-derive colinearity or containment on their own.

use nalgebra::Vector2;

use super::types::{Edge, Point, Tolerance};

/// 2D cross product `u.x*v.y - u.y*v.x`. Positive for a CCW turn from `u` to `v`.
#[inline]
pub fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Euclidean length of `e.p1 - e.p0`.
#[inline]
pub fn edge_length(e: &Edge) -> f64 {
    e.dir().norm()
}

/// `p` is on the line through `e` (cross within `eps`) and inside its bounding box.
pub fn point_on_segment(p: Point, e: &Edge, tol: Tolerance) -> bool {
    if !tol.is_zero(cross(e.dir(), p - e.p0)) {
        return false;
    }
    let (x_lo, x_hi) = min_max(e.p0.x, e.p1.x);
    let (y_lo, y_hi) = min_max(e.p0.y, e.p1.y);
    p.x >= x_lo - tol.eps && p.x <= x_hi + tol.eps && p.y >= y_lo - tol.eps && p.y <= y_hi + tol.eps
}

/// Parallel directions and both endpoints of `e2` on `e1`.
///
/// Not symmetric: `e2` must be contained in `e1`.
pub fn is_colinear(e1: &Edge, e2: &Edge, tol: Tolerance) -> bool {
    tol.is_zero(cross(e1.dir(), e2.dir()))
        && point_on_segment(e2.p0, e1, tol)
        && point_on_segment(e2.p1, e1, tol)
}

/// Directions have a positive dot product.
#[inline]
pub fn is_same_direction(e1: &Edge, e2: &Edge) -> bool {
    e1.dir().dot(&e2.dir()) > 0.0
}

/// At least one endpoint of either edge lies on the other edge.
pub fn touches(e1: &Edge, e2: &Edge, tol: Tolerance) -> bool {
    point_on_segment(e1.p0, e2, tol)
        || point_on_segment(e1.p1, e2, tol)
        || point_on_segment(e2.p0, e1, tol)
        || point_on_segment(e2.p1, e1, tol)
}

/// Closed segments share at least one point (proper crossing or touching).
pub fn segments_intersect(a: &Edge, b: &Edge, tol: Tolerance) -> bool {
    let d1 = cross(a.dir(), b.p0 - a.p0);
    let d2 = cross(a.dir(), b.p1 - a.p0);
    let d3 = cross(b.dir(), a.p0 - b.p0);
    let d4 = cross(b.dir(), a.p1 - b.p0);
    if strictly_opposite(d1, d2, tol) && strictly_opposite(d3, d4, tol) {
        return true;
    }
    touches(a, b, tol)
}

#[inline]
fn strictly_opposite(a: f64, b: f64, tol: Tolerance) -> bool {
    (a > tol.eps && b < -tol.eps) || (a < -tol.eps && b > tol.eps)
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
