//! Exact 2D geometry: points as complex numbers, lines, circles, 2×2 solves.
//!
//! Purpose
//! - Provide the value types every shape and generator is built from.
//! - Keep the numerics explicit: exact comparisons where the shapes rely on them,
//!   a single `GeomCfg` for the few tolerance-based predicates.
//!
//! Conventions
//! - All values are `Copy` and every operation returns a new value.
//! - Degenerate inputs are reported as `GeomError`, never as silent NaNs, at the
//!   operations that can detect them (`solve2`, `inverse2`, `Line::new`,
//!   `Line::intersection`).

mod planar;
mod types;

pub use planar::{from_polar, from_real, inverse2, origin, solve2, sum, Mat2, Planar, Point};
pub use types::{Circle, GeomCfg, Line};

#[cfg(test)]
mod tests;
