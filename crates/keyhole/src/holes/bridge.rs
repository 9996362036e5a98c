//! Stack scan for keyhole bridge candidates.
//!
//! Edges are visited in loop order starting at edge 1 (`points[0] → points[1]`);
//! the closing edge is never compared. Each new edge is tested against the
//! stack of earlier, still-open edges from the top down, so the innermost,
//! most recently opened bridge is reported first. An edge without a match is
//! pushed. Degenerate (zero-length) edges are neither pushed nor matched.
//!
//! The scanner is an iterator: after a candidate is returned, the next call
//! resumes below it in the stack for the same edge, i.e. a rejected candidate
//! behaves as if it had not matched.

use crate::geom::{edge_length, is_colinear, is_same_direction, touches, Edge, Tolerance};

use super::types::Ring;

/// Two antiparallel, overlapping edges of the working loop.
///
/// `open` is the index of the earlier edge (ends at vertex `open`), `close` the
/// later one (ends at vertex `close`). The candidate hole is vertices
/// `open..close`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    pub open: usize,
    pub close: usize,
}

impl Bridge {
    /// Vertex range of the candidate hole.
    #[inline]
    pub fn interior(&self) -> std::ops::Range<usize> {
        self.open..self.close
    }
}

/// Do `old` (earlier) and `new` form a keyhole bridge?
pub fn is_bridge_pair(old: &Edge, new: &Edge, tol: Tolerance) -> bool {
    if edge_length(old) <= tol.eps || edge_length(new) <= tol.eps {
        return false;
    }
    (is_colinear(new, old, tol) || is_colinear(old, new, tol))
        && !is_same_direction(new, old)
        && touches(new, old, tol)
}

/// Iterator over the bridge candidates of one loop, innermost first.
///
/// Holds the stack of open edge indices; `open_edges` exposes it for
/// inspection once the iterator is exhausted.
pub struct BridgeScanner<'a> {
    ring: &'a Ring,
    tol: Tolerance,
    stack: Vec<usize>,
    edge: usize,
    cursor: usize,
}

impl<'a> BridgeScanner<'a> {
    pub fn new(ring: &'a Ring, tol: Tolerance) -> Self {
        Self {
            ring,
            tol,
            stack: Vec::new(),
            edge: 1,
            cursor: 0,
        }
    }

    /// Edges currently open (pushed and not yet matched), bottom first.
    pub fn open_edges(&self) -> &[usize] {
        &self.stack
    }
}

impl Iterator for BridgeScanner<'_> {
    type Item = Bridge;

    fn next(&mut self) -> Option<Bridge> {
        while self.edge < self.ring.len() {
            let new = self.ring.edge(self.edge);
            if edge_length(&new) > self.tol.eps {
                while self.cursor > 0 {
                    self.cursor -= 1;
                    let open = self.stack[self.cursor];
                    if is_bridge_pair(&self.ring.edge(open), &new, self.tol) {
                        return Some(Bridge {
                            open,
                            close: self.edge,
                        });
                    }
                }
                self.stack.push(self.edge);
            }
            self.edge += 1;
            self.cursor = self.stack.len();
        }
        None
    }
}
