//! Base shape of a broccoli run: a polygon plus one outward normal per side.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::errors::{FractalError, GeomError};
use crate::geom2::{Planar, Point};
use crate::shapes::{OrientedLineSegment, OrientedPolygon};

/// Polygon and per-side normals the engine is seeded with.
///
/// Invariants:
/// - `normals.len() == polygon.len()`, `normals[i]` belongs to `polygon.sides()[i]`.
/// - Every normal is a finite unit vector.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseShape {
    polygon: OrientedPolygon,
    normals: Vec<Point>,
}

impl BaseShape {
    pub fn new(polygon: OrientedPolygon, normals: Vec<Point>) -> Result<Self, FractalError> {
        if normals.len() != polygon.len() {
            return Err(FractalError::invalid(format!(
                "{} normals for {} sides",
                normals.len(),
                polygon.len()
            )));
        }
        if let Some(c) = polygon.corners.iter().find(|c| !(c.x.is_finite() && c.y.is_finite())) {
            return Err(FractalError::invalid(format!("non-finite corner {c:?}")));
        }
        for n in &normals {
            if !n.norm().is_finite() || (n.norm() - 1.0).abs() > 1e-6 {
                return Err(FractalError::invalid(format!("normal {n:?} is not a unit vector")));
            }
        }
        Ok(Self { polygon, normals })
    }

    /// Seed normals computed as the outward normals of a convex polygon.
    pub fn with_outward_normals(polygon: OrientedPolygon) -> Result<Self, FractalError> {
        let normals = polygon.outward_normals()?;
        Self::new(polygon, normals)
    }

    /// Right triangle of the 500×500 scene.
    pub fn default_triangle() -> Self {
        Self {
            polygon: OrientedPolygon {
                corners: vec![
                    Point::new(150.0, 150.0),
                    Point::new(350.0, 150.0),
                    Point::new(350.0, 350.0),
                ],
            },
            normals: vec![
                Point::new(0.0, -1.0),
                Point::new(1.0, 0.0),
                Point::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            ],
        }
    }

    /// Square of the 500×500 scene.
    pub fn default_quadrilateral() -> Self {
        Self {
            polygon: OrientedPolygon {
                corners: vec![
                    Point::new(150.0, 150.0),
                    Point::new(350.0, 150.0),
                    Point::new(350.0, 350.0),
                    Point::new(150.0, 350.0),
                ],
            },
            normals: vec![
                Point::new(0.0, -1.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
            ],
        }
    }

    #[inline]
    pub fn polygon(&self) -> &OrientedPolygon {
        &self.polygon
    }

    #[inline]
    pub fn normals(&self) -> &[Point] {
        &self.normals
    }

    /// Move corner `index` to `to`, turning the normals of its two incident sides
    /// with them so they stay perpendicular. Fails without changing anything if
    /// either incident side would collapse.
    pub fn move_corner(&mut self, index: usize, to: Point) -> Result<(), FractalError> {
        let n = self.polygon.len();
        if index >= n {
            return Err(FractalError::invalid(format!(
                "corner {index} out of range for {n} corners"
            )));
        }
        if !(to.x.is_finite() && to.y.is_finite()) {
            return Err(FractalError::invalid(format!("non-finite corner {to:?}")));
        }
        let old = self.polygon.corners[index];
        let prev = (index + n - 1) % n;
        let next = (index + 1) % n;

        // (side index, the other corner of that side)
        let mut turns = [(prev, 0.0), (index, 0.0)];
        for (slot, adjacent) in turns.iter_mut().zip([prev, next]) {
            let anchor = self.polygon.corners[adjacent];
            let before = OrientedLineSegment::new(anchor, old);
            let after = OrientedLineSegment::new(anchor, to);
            for s in [before, after] {
                if s.length() == 0.0 {
                    return Err(GeomError::ZeroLengthSegment {
                        x: anchor.x,
                        y: anchor.y,
                    }
                    .into());
                }
            }
            slot.1 = before.directed_angle_between(&after);
        }

        for (side, turn) in turns {
            self.normals[side] = self.normals[side].rotate_about_origin(turn);
        }
        self.polygon.corners[index] = to;
        tracing::debug!(index, x = to.x, y = to.y, "moved base corner");
        Ok(())
    }
}
