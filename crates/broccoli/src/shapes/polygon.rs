//! Oriented polygons: an ordered corner list whose traversal order is its identity.

use crate::errors::GeomError;
use crate::geom2::{sum, GeomCfg, Planar, Point};

use super::{OrientedLineSegment, OrientedTriangle};

/// Polygon given by its corners in traversal order.
///
/// Invariants:
/// - At least three corners.
/// - Corner order is never changed behind the caller's back; `reverse` and
///   `shift` return new polygons.
/// - `sides()[i]` runs `corners[i] → corners[i + 1 mod n]`; `angles()[i]` is the
///   interior angle at `corners[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedPolygon {
    pub corners: Vec<Point>,
}

impl OrientedPolygon {
    pub fn new(corners: Vec<Point>) -> Result<Self, GeomError> {
        if corners.len() < 3 {
            return Err(GeomError::TooFewCorners { got: corners.len() });
        }
        Ok(Self { corners })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    pub fn sides(&self) -> Vec<OrientedLineSegment> {
        let n = self.corners.len();
        (0..n)
            .map(|i| OrientedLineSegment::new(self.corners[i], self.corners[(i + 1) % n]))
            .collect()
    }

    /// Interior angle at each corner: outgoing side against the reversed incoming side.
    pub fn angles(&self) -> Vec<f64> {
        let sides = self.sides();
        let n = sides.len();
        (0..n)
            .map(|i| {
                let incoming = sides[(i + n - 1) % n];
                sides[i].angle_between(&incoming.reverse())
            })
            .collect()
    }

    pub fn min_angle(&self) -> f64 {
        self.angles().into_iter().fold(f64::INFINITY, f64::min)
    }

    pub fn perimeter(&self) -> f64 {
        self.sides().iter().map(|s| s.length()).sum()
    }

    /// Shoelace area; positive for counterclockwise corner order (y up).
    pub fn signed_area(&self) -> f64 {
        let n = self.corners.len();
        0.5 * (0..n)
            .map(|i| self.corners[i].det(&self.corners[(i + 1) % n]))
            .sum::<f64>()
    }

    /// Same first corner, remaining corners in reverse order.
    pub fn reverse(&self) -> Self {
        let mut corners = Vec::with_capacity(self.corners.len());
        corners.push(self.corners[0]);
        corners.extend(self.corners[1..].iter().rev().copied());
        Self { corners }
    }

    /// Relabel so that corner `k` (mod n) comes first; orientation is unchanged.
    pub fn shift(&self, k: isize) -> Self {
        let n = self.corners.len();
        let k = k.rem_euclid(n as isize) as usize;
        let mut corners = self.corners.clone();
        corners.rotate_left(k);
        Self { corners }
    }

    /// Weighted average of the corners. Weights are expected to sum to 1; only
    /// the count is checked.
    pub fn point_from_barycentric(&self, weights: &[f64]) -> Result<Point, GeomError> {
        if weights.len() != self.corners.len() {
            return Err(GeomError::WeightCount {
                expected: self.corners.len(),
                got: weights.len(),
            });
        }
        Ok(sum(self.corners.iter().zip(weights).map(|(c, w)| c * *w)))
    }

    /// Average of the corners (not the area centroid).
    pub fn vertex_average(&self) -> Point {
        sum(self.corners.iter().copied()) / self.corners.len() as f64
    }

    pub fn boundary_contains_point(&self, p: Point) -> bool {
        self.sides().iter().any(|s| s.contains_point(p))
    }

    /// Strict interior of a *convex* polygon; boundary points are excluded.
    pub fn interior_contains_point(&self, p: Point) -> bool {
        self.interior_contains_point_eps(p, GeomCfg::default())
    }

    pub fn interior_contains_point_eps(&self, p: Point, cfg: GeomCfg) -> bool {
        if self.boundary_contains_point(p) {
            return false;
        }
        let n = self.corners.len();
        (0..n).all(|i| {
            let prev = self.corners[(i + n - 1) % n];
            let cur = self.corners[i];
            let next = self.corners[(i + 1) % n];
            (p - cur).between_vectors_eps(&(next - cur), &(prev - cur), cfg)
        })
    }

    /// Boundary or interior (convex polygons).
    pub fn contains_point(&self, p: Point) -> bool {
        self.boundary_contains_point(p) || self.interior_contains_point(p)
    }

    /// Closed-region test for a convex polygon that tolerates rounding: `p` may lie
    /// up to `eps` outside any side.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        let orientation = self.signed_area().signum();
        self.sides().iter().all(|s| {
            let len = s.length();
            if len == 0.0 {
                return true;
            }
            orientation * s.direction().det(&(p - s.start)) / len >= -eps
        })
    }

    /// Unit normal per side, pointing away from the vertex average. For convex
    /// polygons these are the outward normals the generators are seeded with.
    pub fn outward_normals(&self) -> Result<Vec<Point>, GeomError> {
        let inside = self.vertex_average();
        self.sides()
            .iter()
            .map(|s| s.perp_unit_vector_opposite(inside))
            .collect()
    }

    /// Barycentric weights of `p` over a convex quadrilateral.
    ///
    /// Tries the corner triangles `(c_i, c_{i+1}, c_{i+2})` in order, solves in the
    /// first one containing `p`, and pads the unused corner with weight 0. The
    /// result is one valid weight vector among many; it is not normalized further.
    pub fn quadrilateral_cartesian_to_barycentric(
        &self,
        p: Point,
        cfg: GeomCfg,
    ) -> Result<[f64; 4], GeomError> {
        if self.corners.len() != 4 {
            return Err(GeomError::WeightCount {
                expected: 4,
                got: self.corners.len(),
            });
        }
        for i in 0..4 {
            let tri = OrientedTriangle::new([
                self.corners[i],
                self.corners[(i + 1) % 4],
                self.corners[(i + 2) % 4],
            ]);
            if tri.as_polygon().contains_point_eps(p, cfg.eps_feas) {
                let [l1, l2, l3] = tri.cartesian_to_barycentric(p)?;
                let mut out = [0.0; 4];
                out[i] = l1;
                out[(i + 1) % 4] = l2;
                out[(i + 2) % 4] = l3;
                return Ok(out);
            }
        }
        Err(GeomError::OutsideShape { x: p.x, y: p.y })
    }
}

impl From<OrientedTriangle> for OrientedPolygon {
    fn from(t: OrientedTriangle) -> Self {
        Self {
            corners: t.corners.to_vec(),
        }
    }
}
