//! Oriented triangles: the three-corner specialization with the classical centres.

use crate::errors::GeomError;
use crate::geom2::{solve2, sum, Circle, Mat2, Point};

use super::{OrientedLineSegment, OrientedPolygon};

/// Triangle with corners in traversal order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedTriangle {
    pub corners: [Point; 3],
}

impl OrientedTriangle {
    #[inline]
    pub fn new(corners: [Point; 3]) -> Self {
        Self { corners }
    }

    /// Accepts exactly three corners.
    pub fn from_polygon(poly: &OrientedPolygon) -> Result<Self, GeomError> {
        match poly.corners.as_slice() {
            [a, b, c] => Ok(Self::new([*a, *b, *c])),
            other => Err(GeomError::WeightCount {
                expected: 3,
                got: other.len(),
            }),
        }
    }

    #[inline]
    pub fn as_polygon(&self) -> OrientedPolygon {
        OrientedPolygon::from(*self)
    }

    pub fn sides(&self) -> [OrientedLineSegment; 3] {
        let [a, b, c] = self.corners;
        [
            OrientedLineSegment::new(a, b),
            OrientedLineSegment::new(b, c),
            OrientedLineSegment::new(c, a),
        ]
    }

    fn side_lengths(&self) -> [f64; 3] {
        self.sides().map(|s| s.length())
    }

    pub fn angles(&self) -> Vec<f64> {
        self.as_polygon().angles()
    }

    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    /// Heron's formula.
    pub fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        let [a, b, c] = self.side_lengths();
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }

    pub fn circumradius(&self) -> f64 {
        let [a, b, c] = self.side_lengths();
        a * b * c / (4.0 * self.area())
    }

    pub fn circumcentre(&self) -> Point {
        let [p, q, r] = self.corners;
        let d = 2.0 * (p.x * (q.y - r.y) + q.x * (r.y - p.y) + r.x * (p.y - q.y));
        let (pp, qq, rr) = (p.norm_squared(), q.norm_squared(), r.norm_squared());
        Point::new(
            (pp * (q.y - r.y) + qq * (r.y - p.y) + rr * (p.y - q.y)) / d,
            (pp * (r.x - q.x) + qq * (p.x - r.x) + rr * (q.x - p.x)) / d,
        )
    }

    pub fn circumcircle(&self) -> Circle {
        Circle::new(self.circumcentre(), self.circumradius())
    }

    pub fn centroid(&self) -> Point {
        self.point_from_barycentric([1.0 / 3.0; 3])
    }

    /// Corners weighted by the length of the opposite side.
    pub fn incentre(&self) -> Point {
        let [ab, bc, ca] = self.side_lengths();
        let [a, b, c] = self.corners;
        (a * bc + b * ca + c * ab) / (ab + bc + ca)
    }

    pub fn inradius(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        let [a, b, c] = self.side_lengths();
        ((s - a) * (s - b) * (s - c) / s).sqrt()
    }

    pub fn incircle(&self) -> Circle {
        Circle::new(self.incentre(), self.inradius())
    }

    /// Touch points of the incircle; corner `i` lies on side `i` of `self`.
    pub fn intriangle(&self) -> Result<OrientedTriangle, GeomError> {
        let k = self.incentre();
        let r = self.inradius();
        let sides = self.sides();
        let mut corners = [k; 3];
        for (i, side) in sides.iter().enumerate() {
            let away = side.perp_unit_vector_opposite(self.corners[(i + 2) % 3])?;
            corners[i] = k + away * r;
        }
        Ok(OrientedTriangle::new(corners))
    }

    /// Triangle through the points at parameter `ratio` along each side.
    pub fn ratio_triangle(&self, ratio: f64) -> OrientedTriangle {
        OrientedTriangle::new(self.sides().map(|s| s.point_from_barycentric(ratio)))
    }

    /// Fan from `p`: child `i` is `(side_i.start, p, side_i.end)`.
    pub fn split_from_inner_point(&self, p: Point) -> [OrientedTriangle; 3] {
        self.sides().map(|s| OrientedTriangle::new([s.start, p, s.end]))
    }

    pub fn point_from_barycentric(&self, weights: [f64; 3]) -> Point {
        sum(self.corners.iter().zip(weights).map(|(c, w)| c * w))
    }

    /// Inverse of `point_from_barycentric`; `SingularMatrix` for collinear corners.
    pub fn cartesian_to_barycentric(&self, p: Point) -> Result<[f64; 3], GeomError> {
        let [a, b, c] = self.corners;
        let t = Mat2::new(a.x - c.x, b.x - c.x, a.y - c.y, b.y - c.y);
        let l = solve2(t, p - c)?;
        Ok([l.x, l.y, 1.0 - l.x - l.y])
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.as_polygon().contains_point(p)
    }
}
