//! Recursive geometric fractals and polynomial images of circles.
//!
//! Layers, bottom up:
//! - `geom2`: points as complex numbers, lines, circles, 2×2 solves.
//! - `shapes`: oriented segments, polygons and triangles, and the `Canvas`
//!   boundary they are drawn through.
//! - `colour`: HSL colours and named palettes.
//! - `fractal`: the broccoli engine and the barycentric split generators.
//! - `homotopy`: circle images under complex polynomials.
//! - `render`: an SVG `Canvas`.
//!
//! Generators are synchronous and single-threaded. They validate their
//! configuration, then call `Canvas::draw` once per shape and return
//! `RunStats`.

pub mod colour;
pub mod errors;
pub mod fractal;
pub mod geom2;
pub mod homotopy;
pub mod render;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use errors::{FractalError, GeomError};
pub use geom2::{GeomCfg, Mat2, Point};

/// Common exports for callers that render scenes.
pub mod prelude {
    pub use crate::colour::{Colour, Palette};
    pub use crate::errors::{FractalError, GeomError};
    pub use crate::fractal::{
        barycentric_split, broccoli, quadrilateral_split, BaseShape, BroccoliCfg, ColourFn,
        DegeneratePolicy, HeightFn, QuadSplitCfg, RunStats, SeedTree, SplitCfg, Sprout, Tree,
    };
    pub use crate::geom2::{GeomCfg, Planar, Point};
    pub use crate::homotopy::{
        circle_image_segments, draw_circle_image, CircleImageCfg, ComplexPolynomial, RadiusDriver,
    };
    pub use crate::render::{SvgCanvas, Viewport};
    pub use crate::shapes::{
        Canvas, DrawInstructions, DrawStyle, OrientedLineSegment, OrientedPolygon,
        OrientedTriangle, Recorder,
    };
}
