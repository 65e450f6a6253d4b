//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for angle-sum and containment checks.
//! - `Line`: implicit `a x + b y + c = 0`, normalized so two lines compare by `(a, c)`.
//! - `Circle`: centre and radius, plus even angular sampling of its boundary.

use super::planar::{from_polar, solve2, Mat2, Point};
use crate::errors::GeomError;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Angle-sum equality in `between_vectors`.
    pub eps_angle: f64,
    /// Slack for the tolerant containment predicates.
    pub eps_feas: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_angle: 1e-12,
            eps_feas: 1e-9,
        }
    }
}

/// Line `a x + b y + c = 0`.
///
/// Invariants:
/// - `b == -1` whenever the line is not vertical, otherwise `a == -1, b == 0`.
/// - `(0, 0, c)` is never constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Normalize arbitrary coefficients; rejects `a == b == 0`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeomError> {
        if b != 0.0 {
            Ok(Self {
                a: -a / b,
                b: -1.0,
                c: -c / b,
            })
        } else if a != 0.0 {
            Ok(Self {
                a: -1.0,
                b: 0.0,
                c: -c / a,
            })
        } else {
            Err(GeomError::DegenerateLine { a, b, c })
        }
    }

    /// Line through `p` and `q`. Equal x-coordinates give the vertical line `x = p.x`
    /// (including `p == q`; callers that care must guard zero-length input).
    pub fn through(p: Point, q: Point) -> Self {
        if p.x == q.x {
            Self {
                a: -1.0,
                b: 0.0,
                c: p.x,
            }
        } else {
            let m = (p.y - q.y) / (p.x - q.x);
            Self {
                a: m,
                b: -1.0,
                c: p.y - m * p.x,
            }
        }
    }

    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Strictly on the same side; a point on the line is on neither side.
    #[inline]
    pub fn same_side(&self, p: Point, q: Point) -> bool {
        self.eval(p) * self.eval(q) > 0.0
    }

    pub fn intersection(&self, other: &Line) -> Result<Point, GeomError> {
        let m = Mat2::new(self.a, self.b, other.a, other.b);
        solve2(m, Point::new(-self.c, -other.c)).map_err(|_| GeomError::NoIntersection)
    }

    /// True when the two lines describe the same set (normalized form makes this exact).
    #[inline]
    pub fn coincides_with(&self, other: &Line) -> bool {
        self.b == other.b && self.a == other.a && self.c == other.c
    }
}

/// Circle with centre and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub centre: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(centre: Point, radius: f64) -> Self {
        Self { centre, radius }
    }
    #[inline]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// `n` boundary points at angles `2πi/n`, starting on the positive x-axis.
    pub fn sample_points(&self, n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let theta = std::f64::consts::TAU * (i as f64) / (n as f64);
                self.centre + from_polar(self.radius, theta)
            })
            .collect()
    }
}
