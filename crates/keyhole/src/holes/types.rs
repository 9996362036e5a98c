//! Owned loops, the extraction result, and the error type.

use thiserror::Error;

use super::bridge::Bridge;
use crate::geom::{point_on_segment, signed_area, Edge, Orientation, Point, Tolerance};

/// Errors that stop extraction for a single polygon.
///
/// Rejected bridge candidates are not errors; they are skipped during the scan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoleError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Owned, implicitly closed vertex loop.
///
/// Each vertex remembers its index in the input loop (`source_indices`), so
/// bridges keep a stable identity while the loop shrinks and callers can map
/// output vertices back to input rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
    source: Vec<usize>,
}

/// Identity of a bridge candidate: source indices of both edges' endpoints.
pub(crate) type BridgeKey = [usize; 4];

/// A planned excision: hole = `open..hole_end`, outer keeps `..open` and `resume..`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cut {
    open: usize,
    hole_end: usize,
    resume: usize,
}

impl Ring {
    /// Validate a raw loop: at least 3 vertices, all coordinates finite.
    pub fn new(points: Vec<Point>) -> Result<Self, HoleError> {
        if points.len() < 3 {
            return Err(HoleError::TooFewVertices(points.len()));
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HoleError::NonFinite { index });
        }
        let source = (0..points.len()).collect();
        Ok(Self { points, source })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Index of every vertex in the loop the extraction started from.
    #[inline]
    pub fn source_indices(&self) -> &[usize] {
        &self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::of(&self.points)
    }

    /// Edge `k` runs from vertex `k-1` to vertex `k`; requires `1 <= k < len`.
    #[inline]
    pub(crate) fn edge(&self, k: usize) -> Edge {
        Edge::new(self.points[k - 1], self.points[k])
    }

    pub(crate) fn bridge_key(&self, bridge: Bridge) -> BridgeKey {
        let s = &self.source;
        [
            s[bridge.open - 1],
            s[bridge.open],
            s[bridge.close - 1],
            s[bridge.close],
        ]
    }

    /// Plan removing the sub-loop between the two bridge edges.
    ///
    /// `None` when either resulting loop would drop below 3 vertices.
    pub(crate) fn plan_cut(&self, bridge: Bridge, tol: Tolerance) -> Option<Cut> {
        let (open, close) = (bridge.open, bridge.close);
        let mut hole_end = close;
        if close - open > 1 && tol.coincident(self.points[open], self.points[close - 1]) {
            hole_end -= 1;
        }
        let mut resume = close;
        if tol.coincident(self.points[close], self.points[open - 1]) {
            resume += 1;
        }
        let hole_len = hole_end - open;
        let outer_len = open + (self.points.len() - resume);
        (hole_len >= 3 && outer_len >= 3).then_some(Cut {
            open,
            hole_end,
            resume,
        })
    }

    /// Apply a cut from `plan_cut`: shrink `self` to the outer side, return the hole.
    pub(crate) fn apply_cut(&mut self, cut: Cut, tol: Tolerance) -> Ring {
        let mut hole = Ring {
            points: self.points[cut.open..cut.hole_end].to_vec(),
            source: self.source[cut.open..cut.hole_end].to_vec(),
        };
        self.points = splice_out(&self.points, cut);
        self.source = splice_out(&self.source, cut);

        self.drop_if_straight(cut.open - 1, tol);
        hole.drop_if_straight(0, tol);
        hole.start_at_unique_vertex(tol);
        hole
    }

    /// Rotate so the loop starts at a vertex no other vertex coincides with.
    ///
    /// Keyhole junctions repeat their coordinates. A loop starting on one may
    /// carry a bridge edge as its closing edge, which the scan never visits.
    fn start_at_unique_vertex(&mut self, tol: Tolerance) {
        let pts = &self.points;
        let first = (0..pts.len()).find(|&k| {
            pts.iter()
                .enumerate()
                .all(|(j, &q)| j == k || !tol.coincident(q, pts[k]))
        });
        if let Some(k) = first.filter(|&k| k > 0) {
            self.points.rotate_left(k);
            self.source.rotate_left(k);
        }
    }

    /// Remove vertex `k` when it sits on the segment joining its neighbours.
    fn drop_if_straight(&mut self, k: usize, tol: Tolerance) {
        let n = self.points.len();
        if n <= 3 {
            return;
        }
        let prev = self.points[(k + n - 1) % n];
        let next = self.points[(k + 1) % n];
        if point_on_segment(self.points[k], &Edge::new(prev, next), tol) {
            self.points.remove(k);
            self.source.remove(k);
        }
    }
}

fn splice_out<T: Copy>(v: &[T], cut: Cut) -> Vec<T> {
    let mut out = Vec::with_capacity(cut.open + v.len() - cut.resume);
    out.extend_from_slice(&v[..cut.open]);
    out.extend_from_slice(&v[cut.resume..]);
    out
}

/// A hole loop plus the hole directly containing it (`None`: the outer loop).
#[derive(Clone, Debug, PartialEq)]
pub struct Hole {
    pub ring: Ring,
    pub parent: Option<usize>,
}

/// Outer boundary and the flat list of holes.
///
/// Holes are in containment pre-order: each hole is followed by the holes
/// nested inside it; siblings keep discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    pub outer: Ring,
    pub holes: Vec<Hole>,
}

impl Decomposition {
    /// Signed outer area plus signed hole areas (holes carry the opposite sign).
    pub fn net_area(&self) -> f64 {
        self.outer.signed_area() + self.holes.iter().map(|h| h.ring.signed_area()).sum::<f64>()
    }

    /// Nesting depth: 1 for holes directly inside the outer loop, 2 for islands
    /// inside those, and so on.
    pub fn depth(&self, hole: usize) -> usize {
        let mut depth = 1;
        let mut cur = self.holes[hole].parent;
        while let Some(p) = cur {
            depth += 1;
            cur = self.holes[p].parent;
        }
        depth
    }
}
