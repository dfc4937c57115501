use super::quad::Quad;
use std::ops::Range;

#[derive(Clone)]
pub struct Node {
    /// Slot of the first of four children, 0 for a leaf.
    pub children: usize,
    /// Next node in depth-first order at this level or above, 0 at the end.
    pub next: usize,
    pub quad: Quad,
    /// Range into the tree's entry array covered by this node.
    pub entries: Range<usize>,
    /// Largest body radius anywhere in this subtree, 0 when empty. Filled
    /// by the aggregation pass, not by `build`.
    pub r: f32,
}

impl Node {
    pub fn new(next: usize, quad: Quad, entries: Range<usize>) -> Self {
        Self {
            children: 0,
            next,
            quad,
            entries,
            r: 0.0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children == 0
    }

    pub fn is_branch(&self) -> bool {
        self.children != 0
    }
}
