//! Oriented line segments.

use crate::errors::GeomError;
use crate::geom2::{Line, Planar, Point};

/// Ordered pair `start → end`. Order matters for the direction vector, the
/// barycentric parameter and the signed angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedLineSegment {
    pub start: Point,
    pub end: Point,
}

impl OrientedLineSegment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Infinite line through both endpoints (vertical when the segment is a point).
    #[inline]
    pub fn containing_line(&self) -> Line {
        Line::through(self.start, self.end)
    }

    /// `(1 − λ)·start + λ·end`.
    #[inline]
    pub fn point_from_barycentric(&self, lambda: f64) -> Point {
        self.start * (1.0 - lambda) + self.end * lambda
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.point_from_barycentric(0.5)
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Exact test: collinear with parameter in `[0, 1]`.
    pub fn contains_point(&self, p: Point) -> bool {
        if p == self.start {
            return true;
        }
        let seg = self.direction();
        let rel = p - self.start;
        if rel.parallel_with(&seg) {
            let m = rel.parallel_multiplier(&seg);
            (0.0..=1.0).contains(&m)
        } else {
            false
        }
    }

    /// Distance-based variant of `contains_point` for computed points.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        let seg = self.direction();
        let len2 = seg.norm_squared();
        if len2 == 0.0 {
            return p.distance_from(&self.start) <= eps;
        }
        let t = ((p - self.start).dot(&seg) / len2).clamp(0.0, 1.0);
        p.distance_from(&self.point_from_barycentric(t)) <= eps
    }

    /// Crossing with `line`, if it lies on the segment.
    pub fn line_intersection(&self, line: &Line) -> Result<Point, GeomError> {
        let p = self.containing_line().intersection(line)?;
        if self.contains_point(p) {
            Ok(p)
        } else {
            Err(GeomError::NoIntersection)
        }
    }

    /// Unit normal pointing to the side of the containing line that does *not*
    /// contain `reference`.
    pub fn perp_unit_vector_opposite(&self, reference: Point) -> Result<Point, GeomError> {
        let seg = self.direction();
        let len = seg.norm();
        if len == 0.0 || !len.is_finite() {
            return Err(GeomError::ZeroLengthSegment {
                x: self.start.x,
                y: self.start.y,
            });
        }
        let perp = (seg / len).rotate_about_origin(std::f64::consts::FRAC_PI_2);
        // any point of the segment works as the probe base; start is as good as any
        if self.containing_line().same_side(self.start + perp, reference) {
            Ok(-perp)
        } else {
            Ok(perp)
        }
    }

    /// Unsigned angle between the two direction vectors.
    pub fn angle_between(&self, other: &OrientedLineSegment) -> f64 {
        self.trace_unbased(other);
        self.direction().angle_between(&other.direction())
    }

    /// Signed angle from this direction to `other`'s.
    pub fn directed_angle_between(&self, other: &OrientedLineSegment) -> f64 {
        self.trace_unbased(other);
        self.direction().directed_angle_between(&other.direction())
    }

    #[inline]
    fn trace_unbased(&self, other: &OrientedLineSegment) {
        if self.start != other.start {
            tracing::trace!(
                a = ?self.start,
                b = ?other.start,
                "angle between segments not based at the same point"
            );
        }
    }
}
