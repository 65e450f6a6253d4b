//! Oriented shapes: segments, polygons and triangles whose corner order carries
//! orientation, plus their conversion to draw instructions.
//!
//! Conventions
//! - Reversing corner order flips every signed quantity (directed angles,
//!   signed area, normal choice) and leaves unsigned ones alone.
//! - `interior_contains_point` assumes convexity and excludes the boundary;
//!   `contains_point` is the union of boundary and interior.
//! - `*_eps` predicates exist for computed points where the exact tests would
//!   fail on rounding.

mod draw;
mod polygon;
mod segment;
mod triangle;

pub use draw::{point_instructions, Canvas, DrawInstructions, DrawStyle, Primitive, Recorder};
pub use polygon::OrientedPolygon;
pub use segment::OrientedLineSegment;
pub use triangle::OrientedTriangle;
