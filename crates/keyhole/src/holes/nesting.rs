//! Containment tree over the extracted loops.
//!
//! A loop is peeled from whichever ancestor it validates against; in chains
//! three or more levels deep that is not always the loop directly containing
//! it. Parents are assigned geometrically instead: the smallest extracted loop
//! (by absolute area) that contains the hole. The list is then reordered so
//! every parent precedes its children.

use super::types::{Hole, Ring};
use crate::geom::{locate, Location, Tolerance};

/// Assign containment parents and order the holes in pre-order.
pub(crate) fn nest(rings: Vec<Ring>, tol: Tolerance) -> Vec<Hole> {
    let n = rings.len();
    let areas: Vec<f64> = rings.iter().map(|r| r.signed_area().abs()).collect();
    let parents: Vec<Option<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| areas[j] > areas[i] && encloses(&rings[j], &rings[i], tol))
                .min_by(|&a, &b| areas[a].total_cmp(&areas[b]))
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots = Vec::new();
    for (i, parent) in parents.iter().enumerate() {
        match *parent {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }
    let mut position = vec![0usize; n];
    let mut next = 0;
    let mut stack: Vec<usize> = roots.into_iter().rev().collect();
    while let Some(i) = stack.pop() {
        position[i] = next;
        next += 1;
        stack.extend(children[i].iter().rev());
    }

    let mut holes: Vec<(usize, Hole)> = rings
        .into_iter()
        .zip(parents)
        .enumerate()
        .map(|(i, (ring, parent))| {
            let parent = parent.map(|p| position[p]);
            (position[i], Hole { ring, parent })
        })
        .collect();
    holes.sort_by_key(|(pos, _)| *pos);
    holes.into_iter().map(|(_, h)| h).collect()
}

/// `outer` contains the first vertex of `inner` that is not on its boundary.
fn encloses(outer: &Ring, inner: &Ring, tol: Tolerance) -> bool {
    inner
        .points()
        .iter()
        .map(|&p| locate(p, outer.points(), tol))
        .find(|&loc| loc != Location::Boundary)
        == Some(Location::Inside)
}
