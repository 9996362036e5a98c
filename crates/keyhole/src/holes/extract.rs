//! Hole extraction driver: arena of owned loops plus an explicit worklist.
//!
//! Every loop (the input and each extracted hole) owns its vertices and lives
//! in the arena under a fixed index. The worklist is a stack of arena indices:
//! the top loop is scanned for one hole per pass; a found hole gets a new arena
//! slot and is pushed on top, so it is fully processed (nested keyholes
//! included) before its parent resumes scanning. A loop whose pass finds
//! nothing is popped.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::bridge::BridgeScanner;
use super::nesting::nest;
use super::types::{BridgeKey, Decomposition, HoleError, Ring};
use super::winding::{validate, Verdict};
use crate::geom::{Orientation, Point, Tolerance};

/// Outer loops are assumed counter-clockwise.
pub const OUTER_ORIENTATION: Orientation = Orientation::CounterClockwise;

/// Result of one scan pass over a loop.
#[derive(Debug)]
enum Step {
    Found(Ring),
    Exhausted,
}

struct Entry {
    ring: Ring,
    orientation: Orientation,
    depth: usize,
    rejected: HashSet<BridgeKey>,
}

impl Entry {
    fn new(ring: Ring, orientation: Orientation, depth: usize) -> Self {
        Self {
            ring,
            orientation,
            depth,
            rejected: HashSet::new(),
        }
    }
}

/// Decompose with a tolerance scaled to the input's coordinate magnitude.
pub fn extract_holes(points: &[Point]) -> Result<Decomposition, HoleError> {
    extract_holes_with(points, Tolerance::scaled_for(points))
}

/// Decompose a flattened keyhole loop into its outer loop and holes.
pub fn extract_holes_with(points: &[Point], tol: Tolerance) -> Result<Decomposition, HoleError> {
    let root = Ring::new(points.to_vec())?;
    let mut arena = vec![Entry::new(root, OUTER_ORIENTATION, 0)];
    let mut work = vec![0usize];

    while let Some(&idx) = work.last() {
        match next_hole(&mut arena[idx], tol) {
            Step::Found(hole) => {
                let parent = &arena[idx];
                let child = Entry::new(hole, parent.orientation.opposite(), parent.depth + 1);
                arena.push(child);
                work.push(arena.len() - 1);
            }
            Step::Exhausted => {
                work.pop();
            }
        }
    }

    let outer = arena.remove(0).ring;
    let holes = nest(arena.into_iter().map(|e| e.ring).collect(), tol);
    debug!(holes = holes.len(), "extraction done");
    Ok(Decomposition { outer, holes })
}

/// One pass: first bridge candidate that validates as a hole, excised.
fn next_hole(entry: &mut Entry, tol: Tolerance) -> Step {
    let mut accepted = None;
    for bridge in BridgeScanner::new(&entry.ring, tol) {
        let key = entry.ring.bridge_key(bridge);
        if entry.rejected.contains(&key) {
            continue;
        }
        let candidate = &entry.ring.points()[bridge.interior()];
        match validate(candidate, entry.orientation) {
            Verdict::Hole => match entry.ring.plan_cut(bridge, tol) {
                Some(cut) => {
                    debug!(
                        open = bridge.open,
                        close = bridge.close,
                        depth = entry.depth,
                        vertices = candidate.len(),
                        "hole accepted"
                    );
                    accepted = Some(cut);
                    break;
                }
                None => {
                    trace!(open = bridge.open, close = bridge.close, "degenerate cut");
                    entry.rejected.insert(key);
                }
            },
            Verdict::Rejected { balance } => {
                trace!(
                    open = bridge.open,
                    close = bridge.close,
                    balance,
                    "candidate rejected"
                );
                entry.rejected.insert(key);
            }
        }
    }
    match accepted {
        Some(cut) => Step::Found(entry.ring.apply_cut(cut, tol)),
        None => Step::Exhausted,
    }
}
