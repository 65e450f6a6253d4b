//! Recursive subdivision generators.
//!
//! Purpose
//! - `broccoli`: grow a triangle or quadrilateral on every side of a base shape,
//!   then on every free side of each grown shape, down to a fixed depth.
//! - `barycentric_split` / `quadrilateral_split`: cut a shape into pieces at
//!   fixed barycentric positions, level after level.
//!
//! Model
//! - Plain call-stack recursion, depth bounded by `iterations`; no shape is
//!   revisited.
//! - Every shape is handed to the caller's `Canvas` as soon as it is built.
//! - Configuration is checked before the first draw. Degenerate geometry found
//!   during the traversal is handled per `DegeneratePolicy`.
//! - Random inputs (the hue seed tree) are generated once from a `u64` seed and
//!   only read afterwards, so repeated runs draw identical scenes.

mod base;
mod engine;
mod split;
mod tree;
mod types;

pub use base::BaseShape;
pub use engine::broccoli;
pub use split::{barycentric_split, quadrilateral_split, QuadSplitCfg, SplitCfg, SPLIT_MAX_DEPTH};
pub use tree::{SeedTree, Tree};
pub use types::{
    BroccoliCfg, ColourFn, DegeneratePolicy, HeightFn, RunStats, Sprout, DEFAULT_BASE_END,
    DEFAULT_BASE_START, DEFAULT_DEPTH, DEFAULT_HEIGHT_DECAY, DEFAULT_RATIO, DEFAULT_RATIO2,
    MAX_DEPTH,
};
