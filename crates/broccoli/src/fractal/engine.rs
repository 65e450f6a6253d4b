//! Recursive broccoli subdivision.
//!
//! Every node owns a base segment and a unit normal. It keeps the part of the
//! base between `base_start` and `base_end`, lifts one or two apexes along the
//! normal, draws the resulting shape, and recurses on every side but the kept
//! base. Child normals are obtained by rotating the reversed node normal by an
//! angle read off the new shape's interior angles.
//!
//! Corner order of a grown shape depends on `alternate_orientation` and on
//! whether `base_start < base_end`. That comparison stands in for a convexity
//! test and is known to be only a heuristic: some parameter combinations give
//! self-intersecting children. It is kept as is so that scenes render the same
//! everywhere.

use std::f64::consts::PI;

use crate::colour::Colour;
use crate::errors::{FractalError, GeomError};
use crate::geom2::{Planar, Point};
use crate::shapes::{Canvas, DrawStyle, OrientedLineSegment, OrientedPolygon};

use super::{BaseShape, BroccoliCfg, DegeneratePolicy, HeightFn, RunStats, Sprout};

/// Draw the base shape and grow `cfg.iterations - 1` levels on each of its sides.
///
/// One `draw` call per shape, parents before children, siblings in side order.
pub fn broccoli<C: Canvas + ?Sized>(
    base: &BaseShape,
    cfg: &BroccoliCfg,
    canvas: &mut C,
) -> Result<RunStats, FractalError> {
    cfg.validate()?;
    tracing::debug!(
        sides = base.polygon().len(),
        children = cfg.sprout.children(),
        iterations = cfg.iterations,
        base_start = cfg.base_start,
        base_end = cfg.base_end,
        alternate = cfg.alternate_orientation,
        "broccoli run"
    );

    let mut engine = Engine {
        cfg,
        canvas,
        stats: RunStats::default(),
    };
    engine.draw(base.polygon(), cfg.initial_colour, 0);
    for (side, normal) in base.polygon().sides().into_iter().zip(base.normals()) {
        engine.grow(side, *normal, cfg.initial_colour, cfg.iterations - 1)?;
    }

    tracing::debug!(
        drawn = engine.stats.drawn,
        skipped = engine.stats.skipped,
        max_level = engine.stats.max_level,
        "broccoli done"
    );
    Ok(engine.stats)
}

struct Engine<'a, C: Canvas + ?Sized> {
    cfg: &'a BroccoliCfg,
    canvas: &'a mut C,
    stats: RunStats,
}

impl<C: Canvas + ?Sized> Engine<'_, C> {
    fn draw(&mut self, shape: &OrientedPolygon, fill: Colour, level: u32) {
        let outline = if self.cfg.outline_edges {
            Colour::BLACK
        } else {
            fill
        };
        let style = DrawStyle {
            fill: Some(fill),
            outline: Some(outline),
            thickness: Some(0.0),
        };
        self.canvas.draw(shape.draw_instructions(&style));
        self.stats.record(level);
    }

    fn grow(
        &mut self,
        base: OrientedLineSegment,
        normal: Point,
        last: Colour,
        left: u32,
    ) -> Result<(), FractalError> {
        if left == 0 {
            return Ok(());
        }
        let level = self.cfg.iterations - left;
        let shape = self.sprout(&base, normal);
        let angles = match check(&shape) {
            Ok(angles) => angles,
            Err(err) => return self.degenerate(err, level),
        };

        let colour = self.cfg.colour.apply(last);
        self.draw(&shape, colour, level);

        let rotations = self.rotations(&angles, level);
        let back = -normal;
        for (side, turn) in shape.sides().into_iter().skip(1).zip(rotations) {
            self.grow(side, back.rotate_about_origin(turn), colour, left - 1)?;
        }
        Ok(())
    }

    fn degenerate(&mut self, err: GeomError, level: u32) -> Result<(), FractalError> {
        match self.cfg.on_degenerate {
            DegeneratePolicy::Abort => Err(err.into()),
            DegeneratePolicy::SkipSubtree => {
                tracing::warn!(level, error = %err, "skipping degenerate subtree");
                self.stats.skipped += 1;
                Ok(())
            }
        }
    }

    /// Kept base points first, apexes after; the pair order flips with orientation.
    fn sprout(&self, base: &OrientedLineSegment, normal: Point) -> OrientedPolygon {
        let cfg = self.cfg;
        let start = base.point_from_barycentric(cfg.base_start);
        let end = base.point_from_barycentric(cfg.base_end);
        let len = base.length();
        let apex = |ratio: f64, height: &HeightFn| {
            base.point_from_barycentric(ratio) + normal * height.eval(len)
        };
        let corners = match &cfg.sprout {
            Sprout::Triangle { ratio, height } => {
                let top = apex(*ratio, height);
                if cfg.alternate_orientation {
                    vec![start, end, top]
                } else {
                    vec![end, start, top]
                }
            }
            Sprout::Quadrilateral {
                ratio1,
                height1,
                ratio2,
                height2,
            } => {
                let a1 = apex(*ratio1, height1);
                let a2 = apex(*ratio2, height2);
                if cfg.alternate_orientation {
                    vec![start, end, a2, a1]
                } else {
                    vec![end, start, a1, a2]
                }
            }
        };
        OrientedPolygon { corners }
    }

    /// Rotation applied to the reversed node normal for each child side.
    fn rotations(&self, a: &[f64], level: u32) -> Vec<f64> {
        let cfg = self.cfg;
        let sign = if level % 2 == 0 { 1.0 } else { -1.0 };
        let ascending = cfg.base_start < cfg.base_end;
        match (&cfg.sprout, cfg.alternate_orientation, ascending) {
            (Sprout::Triangle { .. }, true, true) => vec![a[1] * sign, a[0] * -sign],
            (Sprout::Triangle { .. }, true, false) => {
                vec![PI - a[1] * sign, PI - a[0] * -sign]
            }
            (Sprout::Triangle { .. }, false, true) => vec![PI - a[1], PI + a[0]],
            (Sprout::Triangle { .. }, false, false) => vec![a[1], -a[0]],
            (Sprout::Quadrilateral { .. }, true, true) => {
                vec![a[1] * sign, 2.0 * PI - a[2] - a[1], a[0] * -sign]
            }
            (Sprout::Quadrilateral { .. }, true, false) => {
                vec![PI - a[1] * sign, a[1] + PI - a[2], PI - a[0] * -sign]
            }
            (Sprout::Quadrilateral { .. }, false, true) => {
                vec![PI - a[1], 2.0 * PI - a[2] - a[1], PI + a[0]]
            }
            (Sprout::Quadrilateral { .. }, false, false) => {
                vec![a[1], a[1] + PI - a[2], -a[0]]
            }
        }
    }
}

/// Interior angles of a grown shape, or the reason it cannot carry children.
fn check(shape: &OrientedPolygon) -> Result<Vec<f64>, GeomError> {
    for side in shape.sides() {
        let len = side.length();
        if len == 0.0 {
            return Err(GeomError::ZeroLengthSegment {
                x: side.start.x,
                y: side.start.y,
            });
        }
        if !len.is_finite() {
            return Err(GeomError::NonFinite { what: "side length" });
        }
    }
    let angles = shape.angles();
    if angles.iter().any(|a| !a.is_finite()) {
        return Err(GeomError::NonFinite { what: "angle" });
    }
    Ok(angles)
}
