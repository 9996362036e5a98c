//! Hole extraction from flattened keyhole loops.
//!
//! Purpose
//! - Recover "outer boundary + holes" from a single self-touching vertex loop
//!   in which every hole is connected to its parent by a zero-width slit
//!   (a keyhole bridge): the slit walks in along one segment and back out along
//!   the same segment in the opposite direction.
//!
//! Pipeline
//! - `bridge`: stack scan over the loop's edges yielding colinear,
//!   antiparallel, touching edge pairs, innermost first.
//! - `winding`: accepts a candidate only if its turn balance is opposite to
//!   the orientation of the loop containing it.
//! - `extract`: repeats scan + validation per loop, excises accepted holes
//!   and processes each hole the same way (nested keyholes), using an arena
//!   of owned loops and an explicit worklist.
//! - `nesting`: assigns each hole the smallest extracted loop containing it
//!   and orders the result parent-first.
//!
//! Conventions
//! - Outer loops run counter-clockwise, holes clockwise, islands inside holes
//!   counter-clockwise again.
//! - The scan starts at edge 1; the closing edge (last → first vertex) is
//!   never part of a bridge. Input loops should start on the outer boundary;
//!   extracted holes are rotated to start at a non-junction vertex.
//!
//! Code cross-refs: `geom::{is_colinear, is_same_direction, point_on_segment, cross}`.

pub mod bridge;
mod extract;
mod nesting;
pub mod rand;
mod types;
pub mod winding;

pub use bridge::{is_bridge_pair, Bridge, BridgeScanner};
pub use extract::{extract_holes, extract_holes_with, OUTER_ORIENTATION};
pub use types::{Decomposition, Hole, HoleError, Ring};
pub use winding::{turn_balance, validate, Verdict};
