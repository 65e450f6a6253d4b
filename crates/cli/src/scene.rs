//! Scene parameters shared by the command line and JSON scene files.
//!
//! Every scene struct is both a set of `clap` flags and a `serde` document, so
//! `--from file.json` and the flags describe the same thing. Missing JSON fields
//! take the flag defaults. Depths are capped at the scenes' deepest levels on
//! both paths.

use anyhow::{anyhow, bail, Context, Result};
use broccoli::fractal::{
    BaseShape, BroccoliCfg, ColourFn, DegeneratePolicy, HeightFn, QuadSplitCfg, SeedTree,
    SplitCfg, Sprout, DEFAULT_BASE_END, DEFAULT_BASE_START, DEFAULT_DEPTH, DEFAULT_HEIGHT_DECAY,
    DEFAULT_RATIO, DEFAULT_RATIO2, MAX_DEPTH, SPLIT_MAX_DEPTH,
};
use broccoli::homotopy::{
    CircleImageCfg, ComplexPolynomial, RadiusDriver, DEFAULT_COEFFICIENTS, DEFAULT_SAMPLES,
    DEFAULT_SCHEME,
};
use broccoli::prelude::*;
use clap::Args;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Side of the square canvas every scene is authored for.
pub const CANVAS_SIZE: f64 = 500.0;

/// Read a scene from a JSON file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
}

/// One base corner dragged to a new position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drag {
    pub index: usize,
    pub to: [f64; 2],
}

/// `X,Y`
pub fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok([coord(x)?, coord(y)?])
}

/// `INDEX:X,Y`
pub fn parse_drag(s: &str) -> Result<Drag, String> {
    let (index, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:X,Y, got {s:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("bad corner index {index:?}: {e}"))?;
    Ok(Drag {
        index,
        to: parse_point(to)?,
    })
}

fn named_colour(name: &str) -> Result<Colour> {
    Palette::standard().get(name).ok_or_else(|| {
        let known: Vec<_> = Palette::standard().names().collect();
        anyhow!("unknown colour {name:?}; expected one of {}", known.join(", "))
    })
}

fn check_depth(depth: u32, max: u32) -> Result<()> {
    if !(1..=max).contains(&depth) {
        bail!("depth {depth} is outside 1..={max}");
    }
    Ok(())
}

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

#[derive(Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroccoliScene {
    /// Sprout quadrilaterals instead of triangles
    #[arg(long)]
    pub quad: bool,
    /// Start from the square instead of the triangle
    #[arg(long)]
    pub square: bool,
    /// Levels drawn, the base included
    #[arg(
        long,
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64)
    )]
    pub depth: u32,
    #[arg(long)]
    pub alternate: bool,
    /// Where each child base starts along its parent side
    #[arg(long, default_value_t = DEFAULT_BASE_START)]
    pub start: f64,
    /// Where each child base ends along its parent side
    #[arg(long, default_value_t = DEFAULT_BASE_END)]
    pub end: f64,
    /// Apex position along the base (first apex for quads)
    #[arg(long, default_value_t = DEFAULT_RATIO)]
    pub ratio: f64,
    /// Second apex position along the base, quads only
    #[arg(long, default_value_t = DEFAULT_RATIO2)]
    pub ratio2: f64,
    /// Child height as a multiple of its base length
    #[arg(long, default_value_t = DEFAULT_HEIGHT_DECAY)]
    pub decay: f64,
    #[arg(long, default_value = "black")]
    pub colour: String,
    /// Hue shift in degrees from one level to the next
    #[arg(long, default_value_t = 0.0)]
    pub hue_step: f64,
    /// Outline shapes in their own colour instead of black
    #[arg(long)]
    pub no_outline: bool,
    /// Drop degenerate subtrees instead of failing
    #[arg(long)]
    pub skip_degenerate: bool,
    /// Base corner as X,Y; repeat to replace the preset base
    #[arg(long = "corner", value_parser = parse_point)]
    pub corners: Vec<[f64; 2]>,
    /// Move a base corner, as INDEX:X,Y; applied in order
    #[arg(long = "drag", value_parser = parse_drag)]
    pub drags: Vec<Drag>,
}

impl Default for BroccoliScene {
    fn default() -> Self {
        Self {
            quad: false,
            square: false,
            depth: DEFAULT_DEPTH,
            alternate: false,
            start: DEFAULT_BASE_START,
            end: DEFAULT_BASE_END,
            ratio: DEFAULT_RATIO,
            ratio2: DEFAULT_RATIO2,
            decay: DEFAULT_HEIGHT_DECAY,
            colour: "black".into(),
            hue_step: 0.0,
            no_outline: false,
            skip_degenerate: false,
            corners: Vec::new(),
            drags: Vec::new(),
        }
    }
}

impl BroccoliScene {
    pub fn base(&self) -> Result<BaseShape> {
        let mut base = if !self.corners.is_empty() {
            let polygon = OrientedPolygon::new(self.corners.iter().copied().map(point).collect())?;
            BaseShape::with_outward_normals(polygon)?
        } else if self.square {
            BaseShape::default_quadrilateral()
        } else {
            BaseShape::default_triangle()
        };
        for drag in &self.drags {
            base.move_corner(drag.index, point(drag.to))
                .with_context(|| format!("dragging corner {}", drag.index))?;
        }
        Ok(base)
    }

    pub fn config(&self) -> Result<BroccoliCfg> {
        check_depth(self.depth, MAX_DEPTH)?;
        let sprout = if self.quad {
            Sprout::Quadrilateral {
                ratio1: self.ratio,
                height1: HeightFn::linear(self.decay),
                ratio2: self.ratio2,
                height2: HeightFn::linear(self.decay),
            }
        } else {
            Sprout::Triangle {
                ratio: self.ratio,
                height: HeightFn::linear(self.decay),
            }
        };
        let cfg = BroccoliCfg {
            base_start: self.start,
            base_end: self.end,
            sprout,
            initial_colour: named_colour(&self.colour)?,
            colour: if self.hue_step == 0.0 {
                ColourFn::identity()
            } else {
                ColourFn::hue_step(self.hue_step)
            },
            outline_edges: !self.no_outline,
            alternate_orientation: self.alternate,
            iterations: self.depth,
            on_degenerate: if self.skip_degenerate {
                DegeneratePolicy::SkipSubtree
            } else {
                DegeneratePolicy::Abort
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitScene {
    /// Cut the square into quads instead of fanning the triangle
    #[arg(long)]
    pub quad: bool,
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..=SPLIT_MAX_DEPTH as i64)
    )]
    pub depth: u32,
    /// Split point as X,Y; defaults to the scene's point
    #[arg(long, value_parser = parse_point)]
    pub point: Option<[f64; 2]>,
    #[arg(long, default_value_t = 270.0)]
    pub hue: f64,
    /// Degrees of hue drift per level, scaled by the seed tree
    #[arg(long, default_value_t = 10.0)]
    pub variation: f64,
    /// Seed of the hue perturbation tree
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Draw black edges around every piece
    #[arg(long)]
    pub outline: bool,
    #[arg(long)]
    pub no_fill: bool,
    #[arg(long, default_value_t = 1.0)]
    pub thickness: f64,
}

impl Default for SplitScene {
    fn default() -> Self {
        Self {
            quad: false,
            depth: 5,
            point: None,
            hue: 270.0,
            variation: 10.0,
            seed: 0,
            outline: false,
            no_fill: false,
            thickness: 1.0,
        }
    }
}

impl SplitScene {
    pub fn triangle(&self) -> OrientedTriangle {
        SplitCfg::default_triangle()
    }

    pub fn config(&self) -> Result<SplitCfg> {
        check_depth(self.depth, SPLIT_MAX_DEPTH)?;
        if self.no_fill && !self.outline {
            bail!("nothing to draw: --no-fill without --outline");
        }
        let split_point = self
            .point
            .map(point)
            .unwrap_or_else(SplitCfg::default_split_point);
        let cfg = SplitCfg {
            iterations: self.depth,
            fill: (!self.no_fill).then(|| Colour::hsl(self.hue, 100.0, 50.0)),
            outline: self.outline.then_some(Colour::BLACK),
            thickness: self.outline.then_some(self.thickness),
            hue_variation: self.variation,
            ..SplitCfg::default()
        };
        Ok(cfg.with_split_point(&self.triangle(), split_point)?)
    }

    pub fn seeds(&self) -> SeedTree {
        SeedTree::generate(SPLIT_MAX_DEPTH as usize, 3, self.seed)
    }

    pub fn outer_quad(&self) -> Result<OrientedPolygon> {
        Ok(OrientedPolygon::new(vec![
            Point::new(100.0, 100.0),
            Point::new(400.0, 100.0),
            Point::new(400.0, 400.0),
            Point::new(100.0, 400.0),
        ])?)
    }

    pub fn quad_config(&self) -> Result<QuadSplitCfg> {
        check_depth(self.depth, SPLIT_MAX_DEPTH)?;
        let inner = [
            Point::new(200.0, 200.0),
            Point::new(300.0, 200.0),
            Point::new(300.0, 300.0),
            Point::new(200.0, 300.0),
        ];
        let weights = QuadSplitCfg::weights_for(&self.outer_quad()?, inner, GeomCfg::default())?;
        Ok(QuadSplitCfg {
            weights,
            iterations: self.depth,
            colour: if self.no_fill {
                Colour::WHITE
            } else {
                Colour::hsl(self.hue, 100.0, 50.0)
            },
            show_edges: self.outline,
            thickness: self.thickness,
        })
    }
}

#[derive(Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomotopyScene {
    /// Coefficients from the constant term up, whitespace separated
    #[arg(long, default_value = DEFAULT_COEFFICIENTS, allow_hyphen_values = true)]
    pub coefficients: String,
    /// Colour names cycled along the image
    #[arg(long, default_value = DEFAULT_SCHEME)]
    pub scheme: String,
    /// Fixed circle radius; otherwise the radius animation is stepped
    #[arg(long)]
    pub radius: Option<f64>,
    /// Frames rendered by the radius animation
    #[arg(long, default_value_t = 1)]
    pub frames: u32,
    #[arg(long, default_value_t = 1.0 / 3.0)]
    pub speed: f64,
    #[arg(long, default_value_t = 3.0)]
    pub max_radius: f64,
    /// Animation frames skipped before the first rendered one
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,
    #[arg(long, default_value_t = 2.0)]
    pub thickness: f64,
}

impl Default for HomotopyScene {
    fn default() -> Self {
        Self {
            coefficients: DEFAULT_COEFFICIENTS.into(),
            scheme: DEFAULT_SCHEME.into(),
            radius: None,
            frames: 1,
            speed: 1.0 / 3.0,
            max_radius: 3.0,
            skip: 0,
            samples: DEFAULT_SAMPLES,
            thickness: 2.0,
        }
    }
}

impl HomotopyScene {
    pub fn polynomial(&self) -> Result<ComplexPolynomial> {
        self.coefficients
            .parse()
            .with_context(|| format!("parsing coefficients {:?}", self.coefficients))
    }

    pub fn config(&self) -> Result<CircleImageCfg> {
        let palette = Palette::standard().scheme(&self.scheme);
        if palette.is_empty() {
            bail!("colour scheme {:?} names no known colour", self.scheme);
        }
        Ok(CircleImageCfg {
            samples: self.samples,
            palette,
            thickness: self.thickness,
        })
    }

    /// Radius of every rendered frame.
    pub fn radii(&self) -> Result<Vec<f64>> {
        if self.frames == 0 {
            bail!("frames must be at least 1");
        }
        if let Some(r) = self.radius {
            return Ok(vec![r; self.frames as usize]);
        }
        if !(self.speed.is_finite() && self.max_radius.is_finite() && self.max_radius > 0.0) {
            bail!(
                "animation needs a finite speed and a positive max radius, got {} and {}",
                self.speed,
                self.max_radius
            );
        }
        let mut driver = RadiusDriver::new(self.speed, self.max_radius);
        for _ in 0..self.skip {
            driver.tick();
        }
        Ok((0..self.frames).map(|_| driver.tick()).collect())
    }
}
