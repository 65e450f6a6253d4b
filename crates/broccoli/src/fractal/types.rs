//! Configuration values for the subdivision engine.

use std::fmt;
use std::sync::Arc;

use crate::colour::Colour;
use crate::errors::FractalError;

/// Offset magnitude of a new apex as a function of the base length.
#[derive(Clone)]
pub struct HeightFn(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl HeightFn {
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// `s ↦ decay · s`.
    pub fn linear(decay: f64) -> Self {
        Self::new(move |s| decay * s)
    }

    #[inline]
    pub fn eval(&self, base_length: f64) -> f64 {
        (self.0)(base_length)
    }
}

impl fmt::Debug for HeightFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HeightFn(..)")
    }
}

/// Colour of a child shape given its parent's colour.
#[derive(Clone)]
pub struct ColourFn(Arc<dyn Fn(Colour) -> Colour + Send + Sync>);

impl ColourFn {
    pub fn new(f: impl Fn(Colour) -> Colour + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn identity() -> Self {
        Self::new(|c| c)
    }

    /// Constant hue drift per level.
    pub fn hue_step(degrees: f64) -> Self {
        Self::new(move |c| c.perturb_hue(degrees))
    }

    #[inline]
    pub fn apply(&self, parent: Colour) -> Colour {
        (self.0)(parent)
    }
}

impl fmt::Debug for ColourFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColourFn(..)")
    }
}

impl Default for ColourFn {
    fn default() -> Self {
        Self::identity()
    }
}

/// Shape grown on every base segment.
///
/// A triangle sprout has one apex and two children per node; a quadrilateral
/// sprout has two apexes and three children per node. `ratio*` is the
/// barycentric position of the apex foot along the base, `height*` the offset
/// along the node normal.
#[derive(Clone, Debug)]
pub enum Sprout {
    Triangle {
        ratio: f64,
        height: HeightFn,
    },
    Quadrilateral {
        ratio1: f64,
        height1: HeightFn,
        ratio2: f64,
        height2: HeightFn,
    },
}

impl Sprout {
    /// Corners of each grown shape.
    #[inline]
    pub fn corners(&self) -> usize {
        match self {
            Sprout::Triangle { .. } => 3,
            Sprout::Quadrilateral { .. } => 4,
        }
    }

    /// Child branches per node: every side except the shared base.
    #[inline]
    pub fn children(&self) -> usize {
        self.corners() - 1
    }

    fn ratios(&self) -> Vec<f64> {
        match self {
            Sprout::Triangle { ratio, .. } => vec![*ratio],
            Sprout::Quadrilateral { ratio1, ratio2, .. } => vec![*ratio1, *ratio2],
        }
    }
}

/// What to do when a grown shape has a zero-length side or a non-finite angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Stop the traversal and return `FractalError::DegenerateGeometry`.
    #[default]
    Abort,
    /// Log, count in `RunStats::skipped`, and continue with the siblings.
    SkipSubtree,
}

/// Parameters of a `broccoli` run.
#[derive(Clone, Debug)]
pub struct BroccoliCfg {
    /// Barycentric parameter of the first kept base point.
    pub base_start: f64,
    /// Barycentric parameter of the second kept base point.
    pub base_end: f64,
    pub sprout: Sprout,
    pub initial_colour: Colour,
    pub colour: ColourFn,
    /// Outline every shape in black instead of its fill colour.
    pub outline_edges: bool,
    pub alternate_orientation: bool,
    /// Levels including the base; `1` draws the base alone.
    pub iterations: u32,
    pub on_degenerate: DegeneratePolicy,
}

/// Height decay of the preset scenes.
pub const DEFAULT_HEIGHT_DECAY: f64 = 1.0 - 463.0 / 1000.0;
pub const DEFAULT_BASE_START: f64 = 0.445;
pub const DEFAULT_BASE_END: f64 = 0.961 + 1e-4;
pub const DEFAULT_RATIO: f64 = 1.0 / 3.0;
pub const DEFAULT_RATIO2: f64 = 0.637 + 1e-4;
pub const DEFAULT_DEPTH: u32 = 5;
/// Deepest level the interactive scenes offer.
pub const MAX_DEPTH: u32 = 15;

impl BroccoliCfg {
    pub fn default_triangle() -> Self {
        Self {
            base_start: DEFAULT_BASE_START,
            base_end: DEFAULT_BASE_END,
            sprout: Sprout::Triangle {
                ratio: DEFAULT_RATIO,
                height: HeightFn::linear(DEFAULT_HEIGHT_DECAY),
            },
            initial_colour: Colour::BLACK,
            colour: ColourFn::identity(),
            outline_edges: true,
            alternate_orientation: false,
            iterations: DEFAULT_DEPTH,
            on_degenerate: DegeneratePolicy::Abort,
        }
    }

    pub fn default_quadrilateral() -> Self {
        Self {
            sprout: Sprout::Quadrilateral {
                ratio1: DEFAULT_RATIO,
                height1: HeightFn::linear(DEFAULT_HEIGHT_DECAY),
                ratio2: DEFAULT_RATIO2,
                height2: HeightFn::linear(DEFAULT_HEIGHT_DECAY),
            },
            ..Self::default_triangle()
        }
    }

    /// Reject configurations that cannot produce a well-defined traversal.
    pub fn validate(&self) -> Result<(), FractalError> {
        if self.iterations == 0 {
            return Err(FractalError::invalid("iterations must be at least 1"));
        }
        for (name, v) in [("base_start", self.base_start), ("base_end", self.base_end)] {
            if !v.is_finite() || v <= 0.0 || v >= 1.0 {
                return Err(FractalError::invalid(format!(
                    "{name} = {v} is outside (0, 1)"
                )));
            }
        }
        if self.base_start == self.base_end {
            return Err(FractalError::degenerate(format!(
                "base_start == base_end == {} collapses every child base",
                self.base_start
            )));
        }
        for r in self.sprout.ratios() {
            if !r.is_finite() || r <= 0.0 || r > 1.0 {
                return Err(FractalError::invalid(format!(
                    "apex ratio {r} is outside (0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BroccoliCfg {
    fn default() -> Self {
        Self::default_triangle()
    }
}

/// Counters reported by a finished traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Draw calls issued, base included.
    pub drawn: usize,
    /// Subtrees dropped under `DegeneratePolicy::SkipSubtree`.
    pub skipped: usize,
    /// Deepest level drawn; the base is level 0.
    pub max_level: u32,
}

impl RunStats {
    #[inline]
    pub(crate) fn record(&mut self, level: u32) {
        self.drawn += 1;
        self.max_level = self.max_level.max(level);
    }
}
