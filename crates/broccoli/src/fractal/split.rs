//! Barycentric subdivision: triangles fanned from an inner point, and
//! quadrilaterals cut into a centre quad plus four rim quads.

use crate::colour::Colour;
use crate::errors::FractalError;
use crate::geom2::{GeomCfg, Point};
use crate::shapes::{Canvas, DrawStyle, OrientedPolygon, OrientedTriangle};

use super::{RunStats, SeedTree};

/// Parameters of a triangle split.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitCfg {
    /// Barycentric weights of the split point, one per corner.
    pub weights: Vec<f64>,
    /// Levels; `1` draws the input triangle unchanged.
    pub iterations: u32,
    pub fill: Option<Colour>,
    pub outline: Option<Colour>,
    pub thickness: Option<f64>,
    /// Degrees of hue shift per unit of seed value.
    pub hue_variation: f64,
}

/// Depth of the split scene's seed tree, and its deepest offered level.
pub const SPLIT_MAX_DEPTH: u32 = 10;

impl SplitCfg {
    /// Triangle of the 500×500 split scene.
    pub fn default_triangle() -> OrientedTriangle {
        OrientedTriangle::new([
            Point::new(50.0, 50.0),
            Point::new(450.0, 150.0),
            Point::new(250.0, 450.0),
        ])
    }

    /// Split point of the 500×500 split scene.
    pub fn default_split_point() -> Point {
        Point::new(250.0, 200.0)
    }

    /// Replace the weights by those of `p` with respect to `triangle`.
    pub fn with_split_point(
        mut self,
        triangle: &OrientedTriangle,
        p: Point,
    ) -> Result<Self, FractalError> {
        self.weights = triangle.cartesian_to_barycentric(p)?.to_vec();
        Ok(self)
    }

    fn validate(&self, tree: &SeedTree) -> Result<[f64; 3], FractalError> {
        if self.iterations == 0 {
            return Err(FractalError::invalid("iterations must be at least 1"));
        }
        let weights: [f64; 3] = self.weights.as_slice().try_into().map_err(|_| {
            FractalError::invalid(format!(
                "expected 3 barycentric weights, got {}",
                self.weights.len()
            ))
        })?;
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(FractalError::invalid("non-finite barycentric weight"));
        }
        let levels = self.iterations as usize;
        if levels > tree.depth() || !tree.covers(levels, 3) {
            return Err(FractalError::invalid(format!(
                "seed tree of depth {} cannot drive {levels} levels",
                tree.depth()
            )));
        }
        Ok(weights)
    }
}

impl Default for SplitCfg {
    /// Hue 270 fill, no outline, five levels, split at the centroid.
    fn default() -> Self {
        Self {
            weights: vec![1.0 / 3.0; 3],
            iterations: 5,
            fill: Some(Colour::hsl(270.0, 100.0, 50.0)),
            outline: None,
            thickness: None,
            hue_variation: 10.0,
        }
    }
}

/// Split `triangle` recursively at the same barycentric point.
///
/// Child `i` of a node is fanned from side `i` and walks child `i` of the seed
/// node; its fill is the parent fill shifted by `hue_variation · seed`. Only the
/// last level is drawn, so a run draws `3^(iterations - 1)` triangles.
pub fn barycentric_split<C: Canvas + ?Sized>(
    triangle: &OrientedTriangle,
    cfg: &SplitCfg,
    tree: &SeedTree,
    canvas: &mut C,
) -> Result<RunStats, FractalError> {
    let weights = cfg.validate(tree)?;
    tracing::debug!(
        iterations = cfg.iterations,
        hue_variation = cfg.hue_variation,
        "barycentric split"
    );
    let mut stats = RunStats::default();
    split_triangle(
        triangle,
        weights,
        cfg,
        cfg.fill,
        tree,
        cfg.iterations,
        canvas,
        &mut stats,
    );
    Ok(stats)
}

#[allow(clippy::too_many_arguments)]
fn split_triangle<C: Canvas + ?Sized>(
    triangle: &OrientedTriangle,
    weights: [f64; 3],
    cfg: &SplitCfg,
    fill: Option<Colour>,
    seeds: &SeedTree,
    left: u32,
    canvas: &mut C,
    stats: &mut RunStats,
) {
    if left == 1 {
        let style = DrawStyle {
            fill,
            outline: cfg.outline,
            thickness: cfg.thickness,
        };
        canvas.draw(triangle.draw_instructions(&style));
        stats.record(cfg.iterations - 1);
        return;
    }
    let p = triangle.point_from_barycentric(weights);
    let child_fill = fill.map(|c| c.perturb_hue(cfg.hue_variation * seeds.value));
    for (child, child_seeds) in triangle.split_from_inner_point(p).iter().zip(&seeds.children) {
        split_triangle(
            child,
            weights,
            cfg,
            child_fill,
            child_seeds,
            left - 1,
            canvas,
            stats,
        );
    }
}

/// Parameters of a quadrilateral split.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadSplitCfg {
    /// Barycentric weights over the outer quad of each inner corner.
    pub weights: [[f64; 4]; 4],
    /// Levels; `1` draws the five pieces of one cut.
    pub iterations: u32,
    pub colour: Colour,
    /// Outline pieces in black instead of their fill colour.
    pub show_edges: bool,
    pub thickness: f64,
}

impl QuadSplitCfg {
    /// Weights that place the inner corners at `inner` for the quad `outer`.
    pub fn weights_for(
        outer: &OrientedPolygon,
        inner: [Point; 4],
        geom: GeomCfg,
    ) -> Result<[[f64; 4]; 4], FractalError> {
        let mut out = [[0.0; 4]; 4];
        for (slot, p) in out.iter_mut().zip(inner) {
            *slot = outer.quadrilateral_cartesian_to_barycentric(p, geom)?;
        }
        Ok(out)
    }
}

impl Default for QuadSplitCfg {
    /// Each inner corner leans halfway towards its outer corner.
    fn default() -> Self {
        let (a, b) = (1.0 / 2.0, 1.0 / 6.0);
        Self {
            weights: [[a, b, b, b], [b, a, b, b], [b, b, a, b], [b, b, b, a]],
            iterations: 3,
            colour: Colour::WHITE,
            show_edges: true,
            thickness: 1.0,
        }
    }
}

/// Cut `quad` into its centre quad and the four rim quads
/// `(inner_end, inner_start, outer_start, outer_end)`, recursing into all five.
/// A run draws `5^iterations` quads.
pub fn quadrilateral_split<C: Canvas + ?Sized>(
    quad: &OrientedPolygon,
    cfg: &QuadSplitCfg,
    canvas: &mut C,
) -> Result<RunStats, FractalError> {
    if quad.len() != 4 {
        return Err(FractalError::invalid(format!(
            "quadrilateral split needs 4 corners, got {}",
            quad.len()
        )));
    }
    if cfg.iterations == 0 {
        return Err(FractalError::invalid("iterations must be at least 1"));
    }
    if cfg.weights.iter().flatten().any(|w| !w.is_finite()) {
        return Err(FractalError::invalid("non-finite barycentric weight"));
    }
    tracing::debug!(iterations = cfg.iterations, "quadrilateral split");
    let style = DrawStyle {
        fill: Some(cfg.colour),
        outline: Some(if cfg.show_edges { Colour::BLACK } else { cfg.colour }),
        thickness: Some(cfg.thickness),
    };
    let mut stats = RunStats::default();
    split_quad(quad, cfg, &style, cfg.iterations, canvas, &mut stats)?;
    Ok(stats)
}

fn split_quad<C: Canvas + ?Sized>(
    quad: &OrientedPolygon,
    cfg: &QuadSplitCfg,
    style: &DrawStyle,
    left: u32,
    canvas: &mut C,
    stats: &mut RunStats,
) -> Result<(), FractalError> {
    let inner = cfg
        .weights
        .iter()
        .map(|w| quad.point_from_barycentric(w))
        .collect::<Result<Vec<_>, _>>()?;
    let centre = OrientedPolygon { corners: inner };
    let rims = quad
        .sides()
        .into_iter()
        .zip(centre.sides())
        .map(|(outer, inner)| OrientedPolygon {
            corners: vec![inner.end, inner.start, outer.start, outer.end],
        })
        .collect::<Vec<_>>();

    for piece in std::iter::once(&centre).chain(&rims) {
        if left == 1 {
            canvas.draw(piece.draw_instructions(style));
            stats.record(cfg.iterations);
        } else {
            split_quad(piece, cfg, style, left - 1, canvas, stats)?;
        }
    }
    Ok(())
}
