//! Uniform trees of values, and the seeded perturbation trees the split
//! generator walks in lockstep with its recursion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Node value plus children; a leaf has no children.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    #[inline]
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Full tree of the given depth in which every inner node has `branching`
    /// children. `value_fn` receives the remaining depth of the node it fills
    /// and is called in pre-order. A depth of 0 is treated as 1.
    pub fn make<F: FnMut(usize) -> T>(depth: usize, branching: usize, value_fn: &mut F) -> Self {
        let value = value_fn(depth);
        if depth <= 1 {
            return Self::leaf(value);
        }
        let children = (0..branching)
            .map(|_| Self::make(depth - 1, branching, value_fn))
            .collect();
        Self { value, children }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Levels on the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Tree::depth).max().unwrap_or(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Tree::len).sum::<usize>()
    }

    /// Same shape, values mapped by `f`.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: &mut F) -> Tree<U> {
        Tree {
            value: f(&self.value),
            children: self.children.iter().map(|c| c.map(f)).collect(),
        }
    }

    /// True when every node above level `depth` has at least `branching` children.
    pub fn covers(&self, depth: usize, branching: usize) -> bool {
        depth <= 1
            || (self.children.len() >= branching
                && self.children[..branching]
                    .iter()
                    .all(|c| c.covers(depth - 1, branching)))
    }
}

/// Per-branch hue perturbation seeds in `[-1, 1]`.
pub type SeedTree = Tree<f64>;

impl Tree<f64> {
    /// Full seed tree drawn from `StdRng::seed_from_u64(seed)`; equal arguments
    /// give equal trees.
    pub fn generate(depth: usize, branching: usize, seed: u64) -> SeedTree {
        let mut rng = StdRng::seed_from_u64(seed);
        tracing::debug!(depth, branching, seed, "generating seed tree");
        Tree::make(depth, branching, &mut |_| rng.gen_range(-1.0..=1.0))
    }
}
