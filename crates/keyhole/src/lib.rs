//! Keyhole hole extraction for flattened polygon loops.
//!
//! Layout and raster pipelines often store a polygon with holes as one closed
//! vertex loop, joining each hole to the boundary by a zero-width slit. This
//! crate recovers the outer loop and the list of holes from such a loop.
//!
//! - `geom`: numeric predicates (cross, point-on-segment, colinearity, area).
//! - `holes`: bridge scan, winding validation, and the extraction driver.
//!
//! The extraction is synchronous and keeps no global state; independent
//! polygons can be processed on separate threads.

pub mod geom;
pub mod holes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Tolerance};
pub use holes::{extract_holes, extract_holes_with, Decomposition, Hole, HoleError, Ring};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        is_simple, signed_area, Edge, Orientation, Point, Tolerance, DEFAULT_EPS,
    };
    pub use crate::holes::rand::{
        draw_keyhole_grid, flatten_bottom_bridges, nested_squares, GridCfg, HoleCount,
        KeyholeSample, Rect, ReplayToken,
    };
    pub use crate::holes::{
        extract_holes, extract_holes_with, Decomposition, Hole, HoleError, Ring,
    };
    pub use nalgebra::{vector, Vector2 as Vec2};
}
