//! Turn-balance check deciding whether a bridge candidate is a real hole.
//!
//! The balance is the sum over consecutive vertex triples of the sign of the
//! turn (+1 left, -1 right, 0 straight). It is computed on the open vertex
//! slice between the two bridge edges, not on a closed loop.

use crate::geom::{cross, Orientation, Point};

/// Outcome of validating one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Hole,
    /// Balance zero or of the parent's own sign.
    Rejected { balance: i64 },
}

/// Net count of left turns minus right turns along `points`.
pub fn turn_balance(points: &[Point]) -> i64 {
    points
        .windows(3)
        .map(|w| {
            let c = cross(w[1] - w[0], w[2] - w[1]);
            if c > 0.0 {
                1
            } else if c < 0.0 {
                -1
            } else {
                0
            }
        })
        .sum()
}

/// Accept iff the candidate turns opposite to the loop that contains it.
///
/// With the outer loop counter-clockwise this is "balance < 0"; inside a
/// (clockwise) hole, nested islands need a positive balance.
pub fn validate(candidate: &[Point], parent: Orientation) -> Verdict {
    let balance = turn_balance(candidate);
    if balance * parent.opposite().sign() > 0 {
        Verdict::Hole
    } else {
        Verdict::Rejected { balance }
    }
}
