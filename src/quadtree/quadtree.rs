use super::node::Node;
use super::quad::Quad;
use super::traits::{NodeView, SpatialIndex};
use crate::body::Body;
use crate::partition::Partition;
use crate::profile_scope;
use ultraviolet::Vec2;

/// Snapshot of one body taken at build time: predicted position plus the
/// body's stable index. The tree partitions these, never the caller's
/// body array.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub pos: Vec2,
    pub index: usize,
}

/// Flat-array quadtree over predicted body positions. Rebuilt from scratch
/// every resolution iteration; `build` reuses the node and entry buffers
/// across rebuilds.
pub struct Quadtree {
    pub leaf_capacity: usize,
    pub min_quad_size: f32,
    pub nodes: Vec<Node>,
    /// Subdivided nodes in subdivision order; walking this in reverse
    /// visits every subtree before its parent.
    pub parents: Vec<usize>,
    pub entries: Vec<Entry>,
}

impl Quadtree {
    pub const ROOT: usize = 0;

    pub fn new(leaf_capacity: usize, min_quad_size: f32) -> Self {
        Self {
            leaf_capacity: leaf_capacity.max(1),
            min_quad_size,
            nodes: Vec::new(),
            parents: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Split `node` into four quadrant children, partitioning its entry
    /// range in place. Returns the slot of the first child, or `node`
    /// itself when the node is degenerate and must stay a leaf.
    fn subdivide(&mut self, node: usize) -> usize {
        let range = self.nodes[node].entries.clone();
        let center = self.nodes[node].quad.center;

        // Coincident clusters and vanishing quads stay leaves; the
        // resolver's jiggle handles the coincident case.
        let all_same_pos = self.entries[range.clone()]
            .windows(2)
            .all(|w| (w[0].pos - w[1].pos).mag_sq() < 1e-12);
        if all_same_pos || self.nodes[node].quad.size < self.min_quad_size || range.len() <= 1 {
            return node;
        }

        let mut split = [range.start, 0, 0, 0, range.end];

        let predicate = |e: &Entry| e.pos.y < center.y;
        split[2] = split[0] + self.entries[split[0]..split[4]].partition(predicate);

        let predicate = |e: &Entry| e.pos.x < center.x;
        split[1] = split[0] + self.entries[split[0]..split[2]].partition(predicate);
        split[3] = split[2] + self.entries[split[2]..split[4]].partition(predicate);

        let children = self.nodes.len();
        self.parents.push(node);
        self.nodes[node].children = children;

        let nexts = [
            children + 1,
            children + 2,
            children + 3,
            self.nodes[node].next,
        ];
        let quads = self.nodes[node].quad.subdivide();
        for i in 0..4 {
            self.nodes
                .push(Node::new(nexts[i], quads[i], split[i]..split[i + 1]));
        }

        children
    }

    fn build(&mut self, bodies: &[Body]) {
        profile_scope!("quadtree_build");
        self.nodes.clear();
        self.parents.clear();
        self.entries.clear();
        self.entries.extend(bodies.iter().map(|b| Entry {
            pos: b.predicted(),
            index: b.index,
        }));
        if self.entries.is_empty() {
            return;
        }

        let quad = Quad::new_containing(&self.entries);
        self.nodes.push(Node::new(0, quad, 0..self.entries.len()));

        let mut stack = vec![Self::ROOT];
        while let Some(node) = stack.pop() {
            if self.nodes[node].entries.len() <= self.leaf_capacity {
                continue;
            }
            let children = self.subdivide(node);
            if children == node {
                continue;
            }
            for i in 0..4 {
                if !self.nodes[children + i].entries.is_empty() {
                    stack.push(children + i);
                }
            }
        }

        #[cfg(feature = "debug_quadtree")]
        println!(
            "Quadtree::build: {} entries, {} nodes, {} subdivisions",
            self.entries.len(),
            self.nodes.len(),
            self.parents.len()
        );
    }
}

impl SpatialIndex for Quadtree {
    fn rebuild(&mut self, bodies: &[Body]) {
        self.build(bodies);
    }

    fn aggregate_max_radius(&mut self, radii: &[f32]) {
        profile_scope!("quadtree_prepare");
        let Self { nodes, entries, .. } = self;

        for node in nodes.iter_mut() {
            if node.is_leaf() {
                node.r = entries[node.entries.clone()]
                    .iter()
                    .map(|e| radii[e.index])
                    .fold(0.0, f32::max);
            }
        }

        for &node in self.parents.iter().rev() {
            let c = self.nodes[node].children;
            let mut r = 0.0f32;
            for i in 0..4 {
                r = r.max(self.nodes[c + i].r);
            }
            self.nodes[node].r = r;
        }
    }

    fn search(&self, visit: &mut dyn FnMut(&NodeView<'_>) -> bool) {
        if self.nodes.is_empty() {
            return;
        }
        let mut node = Self::ROOT;
        loop {
            let n = &self.nodes[node];
            if n.entries.is_empty() {
                // Empty quadrant left behind by subdivision.
                if n.next == 0 {
                    break;
                }
                node = n.next;
                continue;
            }

            let view = NodeView {
                r: n.r,
                min: n.quad.min(),
                max: n.quad.max(),
                entries: if n.is_leaf() {
                    &self.entries[n.entries.clone()]
                } else {
                    &[]
                },
            };
            let prune = visit(&view);

            if n.is_branch() && !prune {
                node = n.children;
            } else {
                if n.next == 0 {
                    break;
                }
                node = n.next;
            }
        }
    }
}
