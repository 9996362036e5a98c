//! 2D geometry primitives for flattened polygon loops.
//!
//! Purpose
//! - Provide the handful of numeric predicates the bridge scan and the
//!   winding check are built from: cross product, edge length,
//!   point-on-segment, colinearity, same-direction.
//! - Keep every tolerance-dependent comparison in one place, driven by a
//!   single `Tolerance`.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; loops are implicitly closed.
//! - Positive cross product / signed area means counter-clockwise.
//!
//! Code cross-refs: `holes::bridge`, `holes::winding`, `holes::Ring`.

mod area;
mod predicates;
mod types;

pub use area::{is_simple, locate, signed_area, Location, Orientation};
pub use predicates::{
    cross, edge_length, is_colinear, is_same_direction, point_on_segment, segments_intersect,
    touches,
};
pub use types::{Edge, Point, Tolerance, DEFAULT_EPS};

#[cfg(test)]
mod tests;
