//! Images of circles under complex polynomials.
//!
//! A circle of radius `r` is sampled at `N` points spaced `2π/N` apart, every
//! sample is mapped through the polynomial, and consecutive images are joined
//! by straight segments. Accuracy depends on `N` alone; there is no adaptive
//! refinement. Segment colours cycle through a palette so that arcs of the
//! circle can be followed through the map.

mod polynomial;
mod sampler;

pub use polynomial::{AsComplex, ComplexPolynomial};
pub use sampler::{
    circle_image_segments, draw_circle_image, CircleImageCfg, RadiusDriver, DEFAULT_COEFFICIENTS,
    DEFAULT_SAMPLES, DEFAULT_SCHEME,
};

#[cfg(test)]
mod tests;
