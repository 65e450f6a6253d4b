//! Piecewise-linear images of circles under a polynomial, and the radius
//! animation state.

use crate::colour::{Colour, Palette};
use crate::errors::FractalError;
use crate::geom2::{origin, Circle};
use crate::shapes::{Canvas, OrientedLineSegment};

use super::ComplexPolynomial;

pub const DEFAULT_COEFFICIENTS: &str = "1 1 1 1 -1 1 -1";
pub const DEFAULT_SCHEME: &str = "black purple blue red white";
pub const DEFAULT_SAMPLES: usize = 400;

/// Image of the circle `|z| = radius` as `samples` segments joining the images of
/// consecutive sample points; the last segment closes back to the first image.
pub fn circle_image_segments(
    poly: &ComplexPolynomial,
    radius: f64,
    samples: usize,
) -> Result<Vec<OrientedLineSegment>, FractalError> {
    if samples == 0 {
        return Err(FractalError::invalid("number of samples must be positive"));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(FractalError::invalid(format!(
            "radius {radius} must be finite and non-negative"
        )));
    }
    let images: Vec<_> = Circle::new(origin(), radius)
        .sample_points(samples)
        .into_iter()
        .map(|p| poly.evaluate_at(p))
        .collect();
    Ok((0..samples)
        .map(|i| OrientedLineSegment::new(images[i], images[(i + 1) % samples]))
        .collect())
}

/// How a circle image is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleImageCfg {
    pub samples: usize,
    /// Segment `i` gets `palette[i % palette.len()]`.
    pub palette: Vec<Colour>,
    pub thickness: f64,
}

impl Default for CircleImageCfg {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            palette: Palette::standard().scheme(DEFAULT_SCHEME),
            thickness: 2.0,
        }
    }
}

/// Draw every segment of the circle image, one `draw` call each, in sample order.
/// Coordinates are the raw polynomial values; fitting them to a viewport is the
/// canvas's business. Returns the number of segments drawn.
pub fn draw_circle_image<C: Canvas + ?Sized>(
    poly: &ComplexPolynomial,
    radius: f64,
    cfg: &CircleImageCfg,
    canvas: &mut C,
) -> Result<usize, FractalError> {
    if cfg.palette.is_empty() {
        return Err(FractalError::invalid("colour palette is empty"));
    }
    let segments = circle_image_segments(poly, radius, cfg.samples)?;
    for (i, segment) in segments.iter().enumerate() {
        let colour = cfg.palette[i % cfg.palette.len()];
        canvas.draw(segment.draw_instructions(colour, cfg.thickness));
    }
    tracing::trace!(radius, segments = segments.len(), "circle image drawn");
    Ok(segments.len())
}

/// Per-frame radius of the animation: grows from 0 to `max_radius`, then shrinks
/// back, forever. Owned by whoever drives the frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusDriver {
    pub radius: f64,
    /// `+1.0` while growing, `-1.0` while shrinking.
    pub direction: f64,
    pub speed: f64,
    pub max_radius: f64,
}

impl RadiusDriver {
    pub fn new(speed: f64, max_radius: f64) -> Self {
        Self {
            radius: 0.0,
            direction: 1.0,
            speed,
            max_radius,
        }
    }

    /// Advance one frame and return the new radius. The step is taken before the
    /// bounds are checked, so the radius may overshoot `max_radius` by one step.
    /// It never drops below zero.
    pub fn tick(&mut self) -> f64 {
        self.radius += 5.0 * self.speed * self.direction / 1000.0;
        if self.radius >= self.max_radius {
            self.direction = -1.0;
        }
        if self.radius <= 0.0 {
            self.radius = 0.0;
            self.direction = 1.0;
        }
        self.radius
    }
}

impl Default for RadiusDriver {
    fn default() -> Self {
        Self::new(1.0 / 3.0, 3.0)
    }
}
