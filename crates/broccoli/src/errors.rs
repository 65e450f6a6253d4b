//! Error types shared by the geometry kernel and the generators.
//!
//! Two layers:
//! - `GeomError`: a degenerate input detected at the point of computation
//!   (zero-length segment, singular 2×2 system, parallel lines).
//! - `FractalError`: configuration rejected before a traversal starts, or a
//!   `GeomError` surfaced from inside one.

/// Degenerate geometry detected by a primitive operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// A segment with coincident endpoints has no direction and no normal.
    #[error("zero-length segment at ({x}, {y})")]
    ZeroLengthSegment { x: f64, y: f64 },
    /// `det == 0` (or a non-finite inverse) in a 2×2 solve.
    #[error("singular 2x2 matrix (det = {det})")]
    SingularMatrix { det: f64 },
    /// Two lines are parallel or coincident, or the crossing misses the segment.
    #[error("no intersection")]
    NoIntersection,
    /// `0x + 0y + c = 0` is not a line.
    #[error("coefficients ({a}, {b}, {c}) do not describe a line")]
    DegenerateLine { a: f64, b: f64, c: f64 },
    /// A polygon needs at least three corners.
    #[error("polygon needs at least 3 corners, got {got}")]
    TooFewCorners { got: usize },
    /// Barycentric weights must come one per corner.
    #[error("expected {expected} barycentric weights, got {got}")]
    WeightCount { expected: usize, got: usize },
    /// The point is not covered by the shape the operation needs it in.
    #[error("point ({x}, {y}) lies outside the shape")]
    OutsideShape { x: f64, y: f64 },
    /// A derived quantity (angle, length) came out NaN or infinite.
    #[error("non-finite {what}")]
    NonFinite { what: &'static str },
}

/// Errors raised by the fractal generators and the polynomial sampler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FractalError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// Parameters that are individually valid but collapse a generated side.
    #[error("degenerate configuration: {reason}")]
    DegenerateConfiguration { reason: String },
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] GeomError),
}

impl FractalError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateConfiguration {
            reason: reason.into(),
        }
    }
}
