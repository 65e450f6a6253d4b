//! Points of the plane read as complex numbers.
//!
//! `Point` is a plain `nalgebra::Vector2<f64>`; the complex and angular
//! operations the shapes need live on the `Planar` extension trait so that
//! nalgebra's arithmetic (`+`, `-`, scalar `*`, `dot`, `norm`) stays available.

use nalgebra::{Matrix2, Vector2};

use super::types::GeomCfg;
use crate::errors::GeomError;

/// A point / vector / complex number `x + iy`.
pub type Point = Vector2<f64>;
/// 2×2 real matrix `(a b; c d)`.
pub type Mat2 = Matrix2<f64>;

#[inline]
pub fn origin() -> Point {
    Point::zeros()
}

/// `r·(cos θ, sin θ)`.
#[inline]
pub fn from_polar(r: f64, theta: f64) -> Point {
    Point::new(r * theta.cos(), r * theta.sin())
}

/// The real number `r` as the complex number `r + 0i`.
#[inline]
pub fn from_real(r: f64) -> Point {
    Point::new(r, 0.0)
}

/// Sum of all points; the origin for an empty input.
pub fn sum<I: IntoIterator<Item = Point>>(points: I) -> Point {
    points.into_iter().fold(origin(), |acc, p| acc + p)
}

/// Solve `m · v = rhs`.
///
/// Fails with `SingularMatrix` when `det(m) == 0` or the inverse is not finite,
/// instead of letting NaNs leak into downstream geometry.
pub fn solve2(m: Mat2, rhs: Point) -> Result<Point, GeomError> {
    let inv = inverse2(m)?;
    let v = inv * rhs;
    if v.x.is_finite() && v.y.is_finite() {
        Ok(v)
    } else {
        Err(GeomError::SingularMatrix {
            det: m.determinant(),
        })
    }
}

/// Inverse of a 2×2 matrix, `SingularMatrix` when `det == 0`.
pub fn inverse2(m: Mat2) -> Result<Mat2, GeomError> {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(GeomError::SingularMatrix { det });
    }
    m.try_inverse().ok_or(GeomError::SingularMatrix { det })
}

/// Complex and angular operations on `Point`. Every method returns a new value.
pub trait Planar: Sized {
    /// Complex multiplication.
    fn by(&self, other: &Self) -> Self;
    /// Integer power. `power(0)` is `1 + 0i`; negative powers divide, so the
    /// origin raised to a negative power has non-finite components.
    fn power(&self, n: i32) -> Self;
    /// Complex reciprocal `1 / z`.
    fn reciprocal(&self) -> Self;
    /// 2D cross product `x₁y₂ − y₁x₂`.
    fn det(&self, other: &Self) -> f64;
    fn rotate_about_origin(&self, theta: f64) -> Self;
    fn rotate_about(&self, centre: &Self, theta: f64) -> Self;
    /// Unsigned angle in `[0, π]`.
    fn angle_between(&self, other: &Self) -> f64;
    /// Signed angle in `(−π, π]`, positive counterclockwise from `self` to `other`.
    fn directed_angle_between(&self, other: &Self) -> f64;
    /// True when `self` lies in the angular sector spanned from `p` to `q`
    /// (angle-sum test with `cfg.eps_angle`).
    fn between_vectors_eps(&self, p: &Self, q: &Self, cfg: GeomCfg) -> bool;
    #[inline]
    fn between_vectors(&self, p: &Self, q: &Self) -> bool {
        self.between_vectors_eps(p, q, GeomCfg::default())
    }
    /// Exact parallelism; the zero vector is parallel to nothing.
    fn parallel_with(&self, other: &Self) -> bool;
    /// `k` such that `self = k · other`, assuming `parallel_with(other)`.
    fn parallel_multiplier(&self, other: &Self) -> f64;
    fn distance_from(&self, other: &Self) -> f64;
    fn manhattan_distance_from(&self, other: &Self) -> f64;
    fn chebyshev_distance_from(&self, other: &Self) -> f64;
}

impl Planar for Point {
    #[inline]
    fn by(&self, other: &Self) -> Self {
        Point::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    fn power(&self, n: i32) -> Self {
        let base = if n >= 0 { *self } else { self.reciprocal() };
        (0..n.unsigned_abs()).fold(from_real(1.0), |acc, _| acc.by(&base))
    }

    #[inline]
    fn reciprocal(&self) -> Self {
        let r2 = self.norm_squared();
        Point::new(self.x / r2, -self.y / r2)
    }

    #[inline]
    fn det(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn rotate_about_origin(&self, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Point::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    fn rotate_about(&self, centre: &Self, theta: f64) -> Self {
        (self - centre).rotate_about_origin(theta) + centre
    }

    fn angle_between(&self, other: &Self) -> f64 {
        let cos = self.dot(other) / (self.norm() * other.norm());
        // clamp: rounding can push |cos| just past 1 for parallel vectors
        cos.clamp(-1.0, 1.0).acos()
    }

    #[inline]
    fn directed_angle_between(&self, other: &Self) -> f64 {
        self.det(other).atan2(self.dot(other))
    }

    fn between_vectors_eps(&self, p: &Self, q: &Self, cfg: GeomCfg) -> bool {
        let whole = q.angle_between(p);
        let parts = self.angle_between(p) + q.angle_between(self);
        (whole - parts).abs() < cfg.eps_angle
    }

    fn parallel_with(&self, other: &Self) -> bool {
        if self.x == 0.0 && self.y == 0.0 {
            false
        } else if other.x != 0.0 && other.y != 0.0 {
            self.x / other.x == self.y / other.y
        } else if other.x != 0.0 {
            self.y == 0.0
        } else if other.y != 0.0 {
            self.x == 0.0
        } else {
            false
        }
    }

    #[inline]
    fn parallel_multiplier(&self, other: &Self) -> f64 {
        if other.x != 0.0 {
            self.x / other.x
        } else {
            self.y / other.y
        }
    }

    #[inline]
    fn distance_from(&self, other: &Self) -> f64 {
        (self - other).norm()
    }

    #[inline]
    fn manhattan_distance_from(&self, other: &Self) -> f64 {
        let d = self - other;
        d.x.abs() + d.y.abs()
    }

    #[inline]
    fn chebyshev_distance_from(&self, other: &Self) -> f64 {
        let d = self - other;
        d.x.abs().max(d.y.abs())
    }
}
